//! Shared application state handed to every handler.

use std::sync::Arc;

use catalog_store::{ProductRepository, ProductStore};
use tracing::info;

use crate::config::CatalogConfig;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub products: ProductRepository,

    /// Page size used when a listing request has no usable `limit`.
    pub default_page_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<ProductStore>, default_page_limit: usize) -> Self {
        AppState {
            products: ProductRepository::new(store),
            default_page_limit,
        }
    }

    /// Builds the store described by `config` (seeded or empty).
    pub fn from_config(config: &CatalogConfig) -> Self {
        let store = if config.catalog.seed_on_startup {
            ProductStore::seeded()
        } else {
            ProductStore::new()
        };
        info!(
            seeded = config.catalog.seed_on_startup,
            default_page_limit = config.catalog.default_page_limit,
            "Product store ready"
        );
        AppState::new(Arc::new(store), config.catalog.default_page_limit)
    }
}
