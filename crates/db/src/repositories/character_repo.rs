//! Repository for the `characters` table.

use rickmorty_core::character::NewCharacter;
use rickmorty_core::types::DbId;

use crate::models::character::CharacterSummary;
use crate::DbPool;

/// Column list shared across read queries; every read endpoint projects
/// exactly these four columns.
const COLUMNS: &str = "id, name, status, species";

/// Provides the character operations the API exposes: insert, point lookup,
/// full listing. Rows are never updated or deleted through this repository.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the assigned id.
    ///
    /// Columns not named here take their schema defaults (`created` is
    /// stamped by SQLite).
    pub async fn insert(pool: &DbPool, input: &NewCharacter) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO characters (name, status, species, gender, type) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(input.status.as_str())
        .bind(&input.species)
        .bind(input.gender.as_str())
        .bind(&input.kind)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Find a character by id. Absence is `None`, not an error.
    pub async fn find_by_id(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<CharacterSummary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?");
        sqlx::query_as::<_, CharacterSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every character in insertion (rowid) order.
    pub async fn list_all(pool: &DbPool) -> Result<Vec<CharacterSummary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters");
        sqlx::query_as::<_, CharacterSummary>(&query)
            .fetch_all(pool)
            .await
    }
}
