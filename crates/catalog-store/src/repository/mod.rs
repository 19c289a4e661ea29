//! # Repository Module
//!
//! View-speaking facades over the record store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Where Conversion Happens                             │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │  repo.create(&view)                                            │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── view_to_draft  (ProductView → ProductDraft, dollars → cents)      │
//! │  ├── ProductStore   (id assignment, ordering, locking)                 │
//! │  └── record_to_view (ProductRecord → ProductView, cents → dollars)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductView back to the handler                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and paging

pub mod product;
