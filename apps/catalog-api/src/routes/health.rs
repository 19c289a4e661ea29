use axum::http::StatusCode;

/// Health check endpoint: 200 with an empty body.
pub async fn health_handler() -> StatusCode {
    StatusCode::OK
}
