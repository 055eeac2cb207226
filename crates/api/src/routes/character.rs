//! Route definitions for the `/character` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// GET  /character       -> list
/// POST /character       -> create
/// GET  /character/{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/character", get(character::list).post(character::create))
        .route("/character/{id}", get(character::get_by_id))
}
