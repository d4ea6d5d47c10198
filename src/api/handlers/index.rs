//! Handler for the service index.

use axum::Json;

use crate::api::dto::index::IndexResponse;

/// Lists the available endpoints.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "GitHub repository analyzer",
        endpoints: vec!["/fetch/{username}", "/repos", "/top", "/health"],
    })
}
