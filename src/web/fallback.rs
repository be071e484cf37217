use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Default 404 Not Found handler.
///
/// # Overview
///
/// This handler is intended to be used as the final fallback
/// in an Axum router.
///
/// It returns `404 Not Found` with a small JSON body, matching the
/// API's JSON-everywhere convention.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}
