// HTTP request handlers
pub mod auth;
pub mod comments;
pub mod subjects;

use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Discussion board server is running")
}
