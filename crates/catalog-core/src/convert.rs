//! # Conversion Layer
//!
//! Pure mappings between the external view and the stored record.
//!
//! ```text
//! ProductView ── view_to_draft ──► ProductDraft ── (store assigns id) ──► ProductRecord
//! ProductView ◄─────────────── record_to_view ◄────────────────────────── ProductRecord
//! ```
//!
//! Both functions are total: the caller has already validated the view.

use crate::money::Money;
use crate::types::{ProductDraft, ProductRecord, ProductView};

/// Maps an incoming view to storage fields.
///
/// The view's `id` is ignored; identifiers only ever come from the store.
pub fn view_to_draft(view: &ProductView) -> ProductDraft {
    ProductDraft {
        name: view.name.clone(),
        description: view.description.clone(),
        price_cents: Money::from_decimal(view.price).cents(),
    }
}

/// Maps a stored record to the view returned to callers.
pub fn record_to_view(record: &ProductRecord) -> ProductView {
    ProductView {
        id: Some(record.id),
        name: record.name.clone(),
        description: record.description.clone(),
        price: record.price().to_decimal(),
    }
}

impl From<&ProductView> for ProductDraft {
    fn from(view: &ProductView) -> Self {
        view_to_draft(view)
    }
}

impl From<&ProductRecord> for ProductView {
    fn from(record: &ProductRecord) -> Self {
        record_to_view(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Decimal;

    #[test]
    fn test_view_to_draft_converts_price_to_cents() {
        let view = ProductView::new("X", "Y", 19.99);
        let draft = view_to_draft(&view);
        assert_eq!(draft.price_cents, 1999);
        assert_eq!(draft.name, "X");
        assert_eq!(draft.description, "Y");
    }

    #[test]
    fn test_view_to_draft_ignores_caller_id() {
        let mut view = ProductView::new("X", "Y", 1.0);
        view.id = Some(999);
        let record = view_to_draft(&view).into_record(20);
        assert_eq!(record.id, 20);
    }

    #[test]
    fn test_record_to_view_populates_id_and_decimal_price() {
        let record = ProductRecord {
            id: 4,
            name: "Galaxy Watch Ultra".to_string(),
            description: "Galaxy AI is here".to_string(),
            price_cents: 64999,
        };
        let view = record_to_view(&record);
        assert_eq!(view.id, Some(4));
        assert_eq!(view.price, Decimal::new(649.99));
        assert_eq!(view.price.to_string(), "649.99");
    }

    #[test]
    fn test_conversion_round_trip_is_stable() {
        let view = ProductView::new("Galaxy Z Flip6", "Pocket sized", 1100.0);
        let record = ProductDraft::from(&view).into_record(2);
        let back = ProductView::from(&record);
        assert_eq!(back.price, view.price);
        assert_eq!(back.name, view.name);
        assert_eq!(back.id, Some(2));
    }
}
