//! HTTP routing.

pub mod health;
pub mod products;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::routing::get;
use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// The served application: the router behind trailing-slash trimming.
pub type CatalogApp = NormalizePath<Router>;

/// Builds the full application with CORS and request tracing applied.
///
/// Trailing slashes are trimmed before routing, so `/api/products/3/`
/// reaches the same handler as `/api/products/3`. The layer wraps the
/// `Router` from outside; `Router::layer` would only run after a route
/// has already been matched.
pub fn build_router(state: Arc<AppState>) -> CatalogApp {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

    let router = Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/api/products-all", get(products::list_all_products))
        .route(
            "/api/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
