//! Handlers for the `/character` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use rickmorty_core::error::CoreError;
use rickmorty_core::types::DbId;
use rickmorty_core::validation;
use rickmorty_db::models::character::CharacterSummary;
use rickmorty_db::repositories::CharacterRepo;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response payload for a successful create.
#[derive(Serialize)]
pub struct CharacterCreated {
    pub id: DbId,
    pub message: &'static str,
}

/// GET /character
///
/// Every row, projected to `id, name, status, species`, in insertion order.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterSummary>>> {
    let characters = CharacterRepo::list_all(&state.pool).await?;
    Ok(Json(characters))
}

/// POST /character
///
/// The body is taken as untyped JSON so the validator can report every
/// violated constraint in a single 400 response.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> AppResult<(StatusCode, Json<CharacterCreated>)> {
    let input = validation::validate_create(&payload).map_err(|details| AppError::Validation {
        error: "Validation failed",
        details,
    })?;
    let id = CharacterRepo::insert(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CharacterCreated {
            id,
            message: "Character created successfully",
        }),
    ))
}

/// GET /character/{id}
///
/// The path parameter is validated before it reaches the store; a
/// well-formed id with no matching row is a 404, not an error.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<CharacterSummary>> {
    let id = validation::validate_id(&id).map_err(|details| AppError::Validation {
        error: "Invalid ID",
        details,
    })?;
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}
