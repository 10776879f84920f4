//! Liveness handler.
//!
//! - GET /health (and GET / on the browser) -> "OK"

use axum::{http::StatusCode, response::IntoResponse};

/// Always 200 with body `OK`; never touches storage.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
