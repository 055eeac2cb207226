use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// The only expected domain failure in this API is a lookup that finds no
/// row; the Display string is the exact message the wire contract uses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },
}
