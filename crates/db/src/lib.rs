//! SQLite persistence layer for the character API.
//!
//! Exposes pool construction, the startup schema bootstrap, and the
//! character repository. All SQL is parameterized; input never reaches a
//! query through string interpolation.

pub mod models;
pub mod repositories;

use sqlx::sqlite::SqlitePoolOptions;

pub type DbPool = sqlx::SqlitePool;

/// Open the database named by `database_url` (e.g.
/// `sqlite://characters.db?mode=rwc`).
///
/// The pool is capped at a single connection; statement-level serialization
/// is left to SQLite itself.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await
}

/// Connectivity probe, run once at startup before serving.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `characters` table if it is not already present.
///
/// Idempotent. This is the only schema management the service performs; the
/// columns past `gender` are never written or read by any endpoint and keep
/// their defaults.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS characters (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            status TEXT NOT NULL,
            species TEXT NOT NULL,
            type TEXT DEFAULT '',
            gender TEXT NOT NULL,
            origin_name TEXT DEFAULT '',
            origin_url TEXT DEFAULT '',
            location_name TEXT DEFAULT '',
            location_url TEXT DEFAULT '',
            image TEXT DEFAULT '',
            created TEXT DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}
