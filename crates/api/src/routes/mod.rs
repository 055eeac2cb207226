pub mod character;
pub mod meta;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// GET  /                  service metadata
/// GET  /character         list all characters
/// POST /character         create a character
/// GET  /character/{id}    fetch one character
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(meta::router())
        .merge(character::router())
}
