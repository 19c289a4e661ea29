//! # Validation Module
//!
//! Field-level checks for incoming product views.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor                                               │
//! │  └── JSON shape (malformed body → 400 before reaching this module)     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── name: required, no markup / query characters                      │
//! │  ├── description: required, no markup characters                      │
//! │  └── price: finite and > 0                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Conversion + store (assume valid input, never fail on it)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::validate_product_view;
//! use catalog_core::ProductView;
//!
//! assert!(validate_product_view(&ProductView::new("X", "Y", 19.99)).is_ok());
//! assert!(validate_product_view(&ProductView::new("X<script>", "Y", 1.0)).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Decimal;
use crate::types::ProductView;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Characters rejected in product names.
pub const NAME_DISALLOWED: &str = "<>\"'\\%&*:;?@^{}[]~$=!|,";

/// Characters rejected in product descriptions.
pub const DESCRIPTION_DISALLOWED: &str = "<>\"'\\*?@^{}[]~=!|";

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain any of `<>"'\%&*:;?@^{}[]~$=!|,`
pub fn validate_name(name: &str) -> ValidationResult<()> {
    validate_text("name", name, NAME_DISALLOWED)
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain any of `<>"'\*?@^{}[]~=!|`
///
/// Commas, colons and dollar signs are fine here, unlike in names.
pub fn validate_description(description: &str) -> ValidationResult<()> {
    validate_text("description", description, DESCRIPTION_DISALLOWED)
}

fn validate_text(field: &str, value: &str, disallowed: &'static str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().any(|c| disallowed.contains(c)) {
        return Err(ValidationError::DisallowedCharacters {
            field: field.to_string(),
            disallowed,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a decimal price.
///
/// ## Rules
/// - Must be a finite number
/// - Must be strictly positive (free items are not sold through the catalog)
pub fn validate_price(price: Decimal) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "price".to_string(),
        });
    }

    if price.value() <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// View Validator
// =============================================================================

/// Validates every field of a create/update request.
///
/// Fields are checked in order name → description → price; the first
/// failure is returned. The `id` field is not inspected.
pub fn validate_product_view(view: &ProductView) -> ValidationResult<()> {
    validate_name(&view.name)?;
    validate_description(&view.description)?;
    validate_price(view.price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Galaxy Z Fold6").is_ok());
        assert!(validate_name("Galaxy S24 Ultra (512GB)").is_ok());
        assert!(matches!(
            validate_name(""),
            Err(ValidationError::Required { .. })
        ));
        // Only the empty string counts as missing
        assert!(validate_name("   ").is_ok());
        for bad in ["a<b", "a,b", "50%", "a:b", "a$b", "a|b"] {
            assert!(
                matches!(
                    validate_name(bad),
                    Err(ValidationError::DisallowedCharacters { .. })
                ),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_description_allows_punctuation_names_reject() {
        assert!(validate_description("Fast, light: 50% off $").is_ok());
        assert!(validate_description("").is_err());
        assert!(validate_description("<b>bold</b>").is_err());
        assert!(validate_description("really!").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Decimal::new(0.01)).is_ok());
        assert!(matches!(
            validate_price(Decimal::new(0.0)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_price(Decimal::new(-5.0)).is_err());
        assert!(matches!(
            validate_price(Decimal::new(f64::NAN)),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_view_reports_first_failing_field() {
        let view = ProductView::new("", "", 0.0);
        let err = validate_product_view(&view).unwrap_err();
        assert_eq!(err.field(), "name");

        let view = ProductView::new("X", "", 0.0);
        assert_eq!(validate_product_view(&view).unwrap_err().field(), "description");

        let view = ProductView::new("X", "Y", 0.0);
        assert_eq!(validate_product_view(&view).unwrap_err().field(), "price");
    }
}
