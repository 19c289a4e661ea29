//! Built-in product data loaded at startup.

use catalog_core::ProductRecord;

const FOLD: &str = "The ultimate foldable powered by Galaxy AI";
const FLIP: &str = "The power of Galaxy AI right in your pocket";
const ULTRA: &str = "The new era of AI-enhanced smartphones";
const WATCH: &str = "Galaxy AI is here";

const SEED: [(&str, &str, i64); 19] = [
    ("Galaxy Z Fold6", FOLD, 189999),
    ("Galaxy Z Flip6", FLIP, 110000),
    ("Galaxy S24 Ultra", ULTRA, 129900),
    ("Galaxy Watch Ultra", WATCH, 64999),
    ("Galaxy Z Fold7", FOLD, 189999),
    ("Galaxy Z Flip7", FLIP, 110000),
    ("Galaxy S25 Ultra", ULTRA, 129900),
    ("Galaxy Watch Ultra 2", WATCH, 64999),
    ("Galaxy S26 Ultra", ULTRA, 129900),
    ("Galaxy Watch Ultra 3", WATCH, 64999),
    ("Galaxy Z Fold8", FOLD, 189999),
    ("Galaxy Z Flip9", FLIP, 110000),
    ("Galaxy S27 Ultra", ULTRA, 129900),
    ("Galaxy Watch Ultra 4", WATCH, 64999),
    ("Galaxy Z Fold9", FOLD, 189999),
    ("Galaxy Z Flip9", FLIP, 110000),
    ("Galaxy S28 Ultra", ULTRA, 129900),
    ("Galaxy Watch Ultra 5", WATCH, 64999),
    ("Galaxy S29 Ultra", ULTRA, 129900),
];

/// The seed records with ids `1..=19` in catalog order.
pub fn seed_records() -> Vec<ProductRecord> {
    SEED.iter()
        .zip(1..)
        .map(|(&(name, description, price_cents), id)| ProductRecord {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price_cents,
        })
        .collect()
}
