//! Error types for Kinetic

use thiserror::Error;

/// Main error type for Kinetic operations
#[derive(Error, Debug)]
pub enum KineticError {
    /// Typewriter was configured without any strings to cycle
    #[error("Typewriter requires at least one string")]
    EmptyStrings,

    /// A numeric configuration value was NaN or infinite
    #[error("Non-finite value for {field}: {value}")]
    NonFinite {
        /// Name of the offending configuration field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Configuration is finite but otherwise unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A stored or supplied theme name is not `light` or `dark`
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using KineticError
pub type KineticResult<T> = Result<T, KineticError>;

/// Reject NaN and infinities for a named configuration field.
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> KineticResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KineticError::NonFinite { field, value })
    }
}
