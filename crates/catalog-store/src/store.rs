//! # Record Store
//!
//! The single authoritative, ordered collection of product records.
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Lock, One Logical Operation                      │
//! │                                                                         │
//! │  handler A ──┐                                                          │
//! │  handler B ──┼──► Mutex<StoreInner> ──► records: Vec<ProductRecord>     │
//! │  handler C ──┘        (held for the         next_id: i64                │
//! │                        whole operation)                                 │
//! │                                                                         │
//! │  create:  id = next_id; next_id += 1; push        → ids never reused    │
//! │  update:  replace at the same index               → order preserved     │
//! │  delete:  Vec::remove (later records shift left)  → order preserved     │
//! │  page:    count + slice under the same guard      → consistent window   │
//! │                                                                         │
//! │  NOTE: the guard is never held across an .await.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lookups are linear scans; the collection is small and insertion order
//! is the enumeration order.

use std::sync::{Mutex, MutexGuard};

use catalog_core::pagination::paginate;
use catalog_core::{Page, PageRequest, ProductDraft, ProductRecord};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::seed::seed_records;

const ENTITY: &str = "Product";

#[derive(Debug)]
struct StoreInner {
    records: Vec<ProductRecord>,
    next_id: i64,
}

impl StoreInner {
    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

/// In-memory product store.
///
/// ## Invariants
/// - Every id is unique and never reassigned, even after a delete
/// - `next_id` is greater than every id ever assigned
/// - Records are kept in insertion order
#[derive(Debug)]
pub struct ProductStore {
    inner: Mutex<StoreInner>,
}

impl ProductStore {
    /// Creates an empty store whose first id will be 1.
    pub fn new() -> Self {
        ProductStore::with_records(Vec::new())
    }

    /// Creates a store holding `records` in the given order.
    ///
    /// The id counter starts at `max(id) + 1` (or 1 when empty).
    pub fn with_records(records: Vec<ProductRecord>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        ProductStore {
            inner: Mutex::new(StoreInner { records, next_id }),
        }
    }

    /// Creates a store loaded with the built-in seed data (ids 1..=19).
    pub fn seeded() -> Self {
        let store = ProductStore::with_records(seed_records());
        debug!("Seeded product store");
        store
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, StoreInner>> {
        self.inner.lock().map_err(|_| {
            warn!("Product store lock poisoned");
            StoreError::LockPoisoned
        })
    }

    /// Stores a new record built from `draft`.
    ///
    /// The id is the current counter value; the counter then advances by one.
    pub fn create(&self, draft: ProductDraft) -> StoreResult<ProductRecord> {
        let mut inner = self.lock()?;

        let id = inner.next_id;
        inner.next_id += 1;

        let record = draft.into_record(id);
        inner.records.push(record.clone());

        debug!(id, name = %record.name, "Created product");
        Ok(record)
    }

    /// Gets the first record with `id`.
    pub fn get_by_id(&self, id: i64) -> StoreResult<ProductRecord> {
        let inner = self.lock()?;
        inner
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(ENTITY, id))
    }

    /// Snapshot of every record in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<ProductRecord>> {
        let inner = self.lock()?;
        Ok(inner.records.clone())
    }

    /// Replaces the content of record `id` in place, keeping id and position.
    pub fn update(&self, id: i64, draft: ProductDraft) -> StoreResult<ProductRecord> {
        let mut inner = self.lock()?;

        let index = inner
            .position(id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        let record = draft.into_record(id);
        inner.records[index] = record.clone();

        debug!(id, index, "Updated product");
        Ok(record)
    }

    /// Removes record `id` and returns its name.
    ///
    /// A missing id leaves the store untouched.
    pub fn delete(&self, id: i64) -> StoreResult<String> {
        let mut inner = self.lock()?;

        let index = inner
            .position(id)
            .ok_or_else(|| StoreError::not_found(ENTITY, id))?;

        let removed = inner.records.remove(index);

        debug!(id, remaining = inner.records.len(), "Deleted product");
        Ok(removed.name)
    }

    /// Number of records currently stored.
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.lock()?.records.len())
    }

    /// One page of records, computed under a single lock acquisition.
    pub fn page(&self, request: PageRequest) -> StoreResult<Page<ProductRecord>> {
        let inner = self.lock()?;
        let page = paginate(&inner.records, request)?;

        debug!(
            page = page.page,
            returned = page.total_returned_data,
            total = page.total_length,
            "Paged products"
        );
        Ok(page)
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        ProductStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
