//! # Catalog API
//!
//! HTTP front end for the in-memory product catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog API Layers                              │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  axum Router   │  │   Handlers     │  │  ProductRepository         ││
//! │  │                │  │                │  │                            ││
//! │  │ • CorsLayer    │─►│ • parse id     │─►│ • view ⇄ record conversion ││
//! │  │ • TraceLayer   │  │ • validate     │  │ • ProductStore (Mutex)     ││
//! │  │ • /api/...     │  │ • ApiError     │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  Config: defaults → catalog.toml → CATALOG_* environment               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::CatalogConfig;
pub use error::{ApiError, ErrorCode};
pub use routes::{build_router, CatalogApp};
pub use state::AppState;
