//! # Error Types
//!
//! Domain-specific error types for catalog-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  ├── CoreError        - Pagination window errors                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  catalog-store errors (separate crate)                                 │
//! │  └── StoreError       - NotFound, lock failures, wrapped CoreError     │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - status + code + message sent to clients        │
//! │                                                                         │
//! │  Flow: CoreError → StoreError → ApiError → Client                      │
//! │        ValidationError ──────────────► ApiError → Client               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested page starts past the end of the collection.
    ///
    /// ## When This Occurs
    /// `(page - 1) * limit > total`. Asking for the page right after the
    /// last item (`offset == total`) yields an empty page instead.
    #[error("Page {page} (limit {limit}) is out of range for {total} items")]
    PageOutOfRange {
        page: usize,
        limit: usize,
        total: usize,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("'{field}' field required")]
    Required { field: String },

    /// Field contains a character from the rejected set.
    #[error("'{field}' field shouldn't contain any of {disallowed} symbols")]
    DisallowedCharacters {
        field: String,
        disallowed: &'static str,
    },

    /// Value must be greater than zero.
    #[error("'{field}' field should be larger than 0")]
    MustBePositive { field: String },

    /// Value is NaN or infinite.
    #[error("'{field}' field must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::DisallowedCharacters { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
