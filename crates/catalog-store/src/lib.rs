//! # catalog-store: In-Memory Storage for the Product Catalog
//!
//! This crate owns the product records for the lifetime of the process.
//! Nothing is persisted; every start begins from the seed data (or empty).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Catalog Data Flow                        │
//! │                                                                         │
//! │  axum handler (create_product)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  catalog-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Repository   │    │    Store      │    │    Seed      │  │   │
//! │  │   │ (product.rs)  │───►│  (store.rs)   │◄───│  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ views in/out  │    │ Mutex<Vec<..>>│    │ 19 Galaxy    │  │   │
//! │  │   │ conversion    │    │ next_id       │    │ items        │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The locked record collection and id counter
//! - [`seed`] - Built-in startup data
//! - [`error`] - Store error types
//! - [`repository`] - View-level repository (conversion applied here)
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use catalog_core::ProductView;
//! use catalog_store::{ProductRepository, ProductStore};
//!
//! let repo = ProductRepository::new(Arc::new(ProductStore::seeded()));
//! let created = repo.create(&ProductView::new("X", "Y", 19.99)).unwrap();
//! assert_eq!(created.id, Some(20));
//! assert_eq!(repo.get_by_id(20).unwrap().price.to_string(), "19.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::ProductStore;

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
