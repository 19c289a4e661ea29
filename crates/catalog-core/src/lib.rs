//! # catalog-core: Pure Logic for the Product Catalog
//!
//! This crate is the **heart** of the catalog. It contains the data model,
//! the money representations, the conversion contract and the pagination
//! algorithm as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Product Catalog Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-api (axum)                           │   │
//! │  │    POST / GET / PUT / DELETE  /api/products                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                catalog-store (in-memory)                        │   │
//! │  │        ProductStore (Mutex) ◄── ProductRepository               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ pagination │  │ validation│  │   │
//! │  │   │  Record   │  │   Money   │  │ PageRequest│  │   rules   │  │   │
//! │  │   │  View     │  │  Decimal  │  │   Page     │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - ProductRecord, ProductDraft, ProductView
//! - [`money`] - Money (cents) and Decimal (human form)
//! - [`convert`] - View ⇄ record mappings
//! - [`pagination`] - Window calculation over an ordered collection
//! - [`validation`] - Field rules for incoming views
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::convert::{record_to_view, view_to_draft};
//! use catalog_core::ProductView;
//!
//! let draft = view_to_draft(&ProductView::new("X", "Y", 19.99));
//! assert_eq!(draft.price_cents, 1999);
//!
//! let view = record_to_view(&draft.into_record(20));
//! assert_eq!(view.price.to_string(), "19.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod convert;
pub mod error;
pub mod money;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Decimal, Money};
pub use pagination::{Page, PageRequest};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page number used when the query omits it or gives a non-positive value.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the query omits it or gives a non-positive value.
pub const DEFAULT_PAGE_LIMIT: usize = 5;
