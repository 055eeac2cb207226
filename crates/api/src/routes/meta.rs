use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Static service metadata returned at the root path.
#[derive(Serialize)]
pub struct ApiInfo {
    pub message: &'static str,
    /// Path templates of the character endpoints.
    pub endpoints: [&'static str; 2],
}

/// GET / -- service metadata; no validation, no persistence.
async fn index() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Rick and Morty API",
        endpoints: ["/character", "/character/:id"],
    })
}

/// Mount the root metadata route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
