//! # Product Repository
//!
//! Catalog operations expressed in terms of [`ProductView`].
//!
//! ## Key Operations
//! - CRUD operations
//! - Unbounded listing in insertion order
//! - Paginated listing

use std::sync::Arc;

use catalog_core::convert::{record_to_view, view_to_draft};
use catalog_core::{Page, PageRequest, ProductView};
use tracing::debug;

use crate::error::StoreResult;
use crate::store::ProductStore;

/// Repository for product operations.
///
/// Cloning is cheap: every clone shares the same underlying store.
///
/// ## Usage
/// ```rust
/// use std::sync::Arc;
/// use catalog_core::PageRequest;
/// use catalog_store::{ProductRepository, ProductStore};
///
/// let repo = ProductRepository::new(Arc::new(ProductStore::seeded()));
/// let page = repo.list_paginated(PageRequest::new(1, 5)).unwrap();
/// assert_eq!(page.total_pages, 4);
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: Arc<ProductStore>,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(store: Arc<ProductStore>) -> Self {
        ProductRepository { store }
    }

    /// Creates a product from a view. Any `id` on the view is ignored.
    ///
    /// ## Returns
    /// The stored product, including its freshly assigned id.
    pub fn create(&self, view: &ProductView) -> StoreResult<ProductView> {
        debug!(name = %view.name, "Creating product");
        let record = self.store.create(view_to_draft(view))?;
        Ok(record_to_view(&record))
    }

    /// Gets a product by its id.
    pub fn get_by_id(&self, id: i64) -> StoreResult<ProductView> {
        debug!(id, "Getting product by ID");
        let record = self.store.get_by_id(id)?;
        Ok(record_to_view(&record))
    }

    /// Lists every product in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<ProductView>> {
        let records = self.store.list_all()?;
        debug!(count = records.len(), "Listing all products");
        Ok(records.iter().map(record_to_view).collect())
    }

    /// Lists one page of products.
    ///
    /// ## Returns
    /// * `Ok(page)` - possibly empty when the page starts exactly at the end
    /// * `Err(StoreError::Core(CoreError::PageOutOfRange))` - page starts past the end
    pub fn list_paginated(&self, request: PageRequest) -> StoreResult<Page<ProductView>> {
        let page = self.store.page(request)?;
        Ok(page.map(|record| record_to_view(&record)))
    }

    /// Replaces the fields of product `id`, keeping its id and position.
    pub fn update(&self, id: i64, view: &ProductView) -> StoreResult<ProductView> {
        debug!(id, "Updating product");
        let record = self.store.update(id, view_to_draft(view))?;
        Ok(record_to_view(&record))
    }

    /// Deletes product `id`.
    ///
    /// ## Returns
    /// The name of the deleted product.
    pub fn delete(&self, id: i64) -> StoreResult<String> {
        debug!(id, "Deleting product");
        self.store.delete(id)
    }

    /// Number of stored products.
    pub fn count(&self) -> StoreResult<usize> {
        self.store.count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use catalog_core::{CoreError, Decimal};

    fn seeded_repo() -> ProductRepository {
        ProductRepository::new(Arc::new(ProductStore::seeded()))
    }

    #[test]
    fn test_create_converts_price_and_assigns_id() {
        let repo = seeded_repo();
        let mut view = ProductView::new("X", "Y", 19.99);
        view.id = Some(1);

        let created = repo.create(&view).unwrap();
        assert_eq!(created.id, Some(20));
        assert_eq!(created.price, Decimal::new(19.99));

        let fetched = repo.get_by_id(20).unwrap();
        assert_eq!(fetched.price.to_string(), "19.99");
        assert_eq!(repo.get_by_id(1).unwrap().name, "Galaxy Z Fold6");
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let repo = seeded_repo();
        repo.create(&ProductView::new("Last", "Y", 1.0)).unwrap();

        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 20);
        assert_eq!(all[0].id, Some(1));
        assert_eq!(all[19].name, "Last");
    }

    #[test]
    fn test_list_paginated_converts_values() {
        let repo = seeded_repo();
        let page = repo.list_paginated(PageRequest::new(1, 5)).unwrap();
        assert_eq!(page.total_returned_data, 5);
        assert_eq!(page.values[0].price.to_string(), "1899.99");

        let err = repo.list_paginated(PageRequest::new(5, 5)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::PageOutOfRange { page: 5, .. })
        ));
    }

    #[test]
    fn test_update_and_delete() {
        let repo = seeded_repo();
        let updated = repo
            .update(2, &ProductView::new("Galaxy Z Flip6 Pro", "Y", 1150.5))
            .unwrap();
        assert_eq!(updated.id, Some(2));
        assert_eq!(updated.price.to_string(), "1150.50");

        assert_eq!(repo.delete(2).unwrap(), "Galaxy Z Flip6 Pro");
        assert!(repo.get_by_id(2).unwrap_err().is_not_found());
        assert!(repo.delete(2).unwrap_err().is_not_found());
        assert_eq!(repo.count().unwrap(), 18);
    }

    #[test]
    fn test_clones_share_the_store() {
        let repo = seeded_repo();
        let other = repo.clone();
        other.delete(19).unwrap();
        assert_eq!(repo.count().unwrap(), 18);
    }
}
