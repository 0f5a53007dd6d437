//! Gateway error model.

use thiserror::Error;

/// Result type used across the persistence gateway.
pub type StoreResult<T> = Result<T, StoreError>;

/// Unexpected persistence fault.
///
/// Expected conditions (row absent, row changed under a writer) are modeled as
/// outcome values, not errors; anything reaching this type is terminal for the
/// request that produced it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}
