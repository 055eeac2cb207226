//! Character row projection.

use rickmorty_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// The projection of a `characters` row returned by every read endpoint:
/// `id, name, status, species`. The remaining columns are write-only or
/// schema defaults and never cross the wire.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterSummary {
    pub id: DbId,
    pub name: String,
    pub status: String,
    pub species: String,
}
