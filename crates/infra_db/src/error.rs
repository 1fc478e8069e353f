//! Database error types

use thiserror::Error;

use domain_claimant::StoreError;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Migration error
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

// Misses are mapped to StoreError::NotFound at the repository; anything
// reaching this conversion is a backend fault.
impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        StoreError::backend(err.to_string())
    }
}
