//! # Domain Types
//!
//! The two shapes a product takes in the catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ProductView    │   │  ProductDraft   │   │  ProductRecord  │       │
//! │  │  (external)     │──►│  (no id yet)    │──►│  (stored)       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id: Option     │   │  name           │   │  id (i64)       │       │
//! │  │  name           │   │  description    │   │  name           │       │
//! │  │  description    │   │  price_cents    │   │  description    │       │
//! │  │  price: Decimal │   └─────────────────┘   │  price_cents    │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │           ▲                                           │                 │
//! │           └───────────── record_to_view ──────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are sequential `i64` values assigned by the store, never by
//! the caller.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Decimal, Money};

// =============================================================================
// Product Record
// =============================================================================

/// A product as it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Sequential identifier, assigned once at creation.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
}

impl ProductRecord {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Storage fields of a product before the store assigns an identifier.
///
/// Also used for updates: the store keeps the existing id and position and
/// replaces everything the draft carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
}

impl ProductDraft {
    /// Completes the draft with a store-assigned identifier.
    pub fn into_record(self, id: i64) -> ProductRecord {
        ProductRecord {
            id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
        }
    }
}

// =============================================================================
// Product View
// =============================================================================

/// A product as callers send and receive it.
///
/// ## JSON Shape
/// ```json
/// { "id": 3, "name": "Galaxy S24 Ultra", "description": "...", "price": 1299.00 }
/// ```
///
/// Missing text fields and a missing price deserialize to empty/zero so
/// that validation reports them as required instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductView {
    /// Absent on create requests, present on every response.
    #[serde(default)]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Decimal price, rendered with exactly two fractional digits.
    #[serde(default)]
    pub price: Decimal,
}

impl ProductView {
    /// Builds a view for a create or update request (no id).
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        ProductView {
            id: None,
            name: name.into(),
            description: description.into(),
            price: Decimal::new(price),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
