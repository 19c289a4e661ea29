//! # Product Handlers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST   /api/products        validate → repo.create   → 201 {message,data}
//! │  GET    /api/products/{id}   parse id → repo.get      → 200 view        │
//! │  GET    /api/products-all               repo.list_all → 200 [view]      │
//! │  GET    /api/products?page&limit        repo.page     → 200 paginated   │
//! │  PUT    /api/products/{id}   parse id → exists → validate → update → 200│
//! │  DELETE /api/products/{id}   parse id → repo.delete   → 200 {message}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use catalog_core::validation::validate_product_view;
use catalog_core::{Page, PageRequest, ProductView};

use crate::error::ApiError;
use crate::state::AppState;

pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Request / Response Bodies
// =============================================================================

/// Raw listing query. Values stay strings so junk falls back to defaults
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// `{ message }` or `{ message, data }`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ProductView>,
}

/// Body of `GET /api/products`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedProducts {
    pub page: usize,
    pub total_returned_data: usize,
    pub total_length: usize,
    pub total_pages: usize,
    pub products_data: Vec<ProductView>,
}

impl From<Page<ProductView>> for PaginatedProducts {
    fn from(page: Page<ProductView>) -> Self {
        PaginatedProducts {
            page: page.page,
            total_returned_data: page.total_returned_data,
            total_length: page.total_length,
            total_pages: page.total_pages,
            products_data: page.values,
        }
    }
}

/// Path ids are always base-10 `i64`.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::invalid_id())
}

fn parse_body(payload: Result<Json<ProductView>, JsonRejection>) -> ApiResult<ProductView> {
    let Json(view) = payload?;
    validate_product_view(&view)?;
    Ok(view)
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ProductView>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let view = parse_body(payload)?;
    let created = state.products.create(&view)?;

    info!(id = ?created.id, name = %created.name, "Product created");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("{} successfully created", created.name),
            data: Some(created),
        }),
    ))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<ProductView>> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.products.get_by_id(id)?))
}

pub async fn list_all_products(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ProductView>>> {
    Ok(Json(state.products.list_all()?))
}

pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<PaginatedProducts>> {
    let request = PageRequest::from_query(
        query.page.as_deref(),
        query.limit.as_deref(),
        state.default_page_limit,
    );
    let page = state.products.list_paginated(request)?;
    Ok(Json(page.into()))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    payload: Result<Json<ProductView>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id)?;
    // Unknown ids are 404 whatever the body holds
    state.products.get_by_id(id)?;
    let view = parse_body(payload)?;
    let updated = state.products.update(id, &view)?;

    info!(id, "Product updated");
    Ok(Json(MessageResponse {
        message: format!("{} successfully updated", updated.name),
        data: Some(updated),
    }))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&raw_id)?;
    let name = state.products.delete(id)?;

    info!(id, "Product deleted");
    Ok(Json(MessageResponse {
        message: format!("{} successfully deleted", name),
        data: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_is_base_ten() {
        assert_eq!(parse_id("19").unwrap(), 19);
        assert_eq!(parse_id("010").unwrap(), 10);
        assert!(parse_id("0x10").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_paginated_body_field_names() {
        let page = Page {
            page: 1,
            total_returned_data: 1,
            total_length: 1,
            total_pages: 1,
            values: vec![ProductView::new("X", "Y", 1.0)],
        };
        let json = serde_json::to_value(PaginatedProducts::from(page)).unwrap();
        for key in ["page", "totalReturnedData", "totalLength", "totalPages", "productsData"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
