//! # Database Error Types
//!
//! Error types for repository operations and configuration.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (bookcase-core)      SQLite Error (sqlx::Error)       │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  DbError::Validation       DbError::{QueryFailed, PoolExhausted, ...}  │
//! │       │                                    │                            │
//! │       └──────────────┬─────────────────────┘                            │
//! │                      ▼                                                  │
//! │  DbError::kind() → Validation | NotFound | Store                       │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │  API boundary maps the kind to a status code                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are never retried here; they propagate unchanged.

use bookcase_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Caller-supplied data violates a book rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Entity not found in database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed (including constraint violations).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Beginning or committing a transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Coarse classification of a [`DbError`] for the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Fix the input and try again.
    Validation,
    /// The referenced record does not exist.
    NotFound,
    /// The store failed; unexpected.
    Store,
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Classifies the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::Validation(_) => ErrorKind::Validation,
            DbError::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::Store,
        }
    }

    /// The underlying validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            DbError::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
