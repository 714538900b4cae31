use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A row references a parent that does not exist
    #[error("{entity} not found: {id}")]
    MissingParent { entity: &'static str, id: String },

    /// Stored data failed domain validation on the way out
    #[error("invalid stored data: {0}")]
    Corrupt(String),
}
