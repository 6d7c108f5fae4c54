//! Error types for the bailout library.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Message shown to callers for any not-found-class failure. Unknown plans,
/// expired plans and unknown secrets all read the same.
pub const NOT_FOUND_MESSAGE: &str = "Bailout plan not found or expired.";

/// Message shown to callers for storage and other internal failures.
pub const INTERNAL_MESSAGE: &str = "Internal server error.";

/// Comprehensive error type for all bailout operations.
#[derive(Error, Debug)]
pub enum BailoutError {
    /// Plan does not exist, or exists but is past the expiry window
    #[error("Bailout plan not found or expired")]
    NotFound,
    /// Plan is live but the secret matches none of its participants
    #[error("Invalid participant for this plan")]
    InvalidParticipant,
    /// The database was busy or locked by a concurrent writer
    #[error("Transaction conflict: {message}")]
    TransactionConflict { message: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A retryable failure persisted past the retry budget
    #[error("Operation failed after {attempts} attempts")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        source: Box<BailoutError>,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    ///
    /// Busy and locked codes become [`BailoutError::TransactionConflict`] so
    /// the coordinator can tell contention apart from real storage failures.
    pub fn with_source(self, source: rusqlite::Error) -> BailoutError {
        match source.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) => {
                BailoutError::TransactionConflict {
                    message: format!("{}: {}", self.message, source),
                }
            }
            _ => BailoutError::Database {
                message: self.message,
                source,
            },
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BailoutError {
        BailoutError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BailoutError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the failure is transient and the whole attempt may be rerun.
    ///
    /// Validation outcomes are deterministic and never retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BailoutError::TransactionConflict { .. } | BailoutError::Database { .. }
        )
    }

    /// Whether the error belongs to the opaque not-found class that callers
    /// must not be able to tell apart.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            BailoutError::NotFound | BailoutError::InvalidParticipant
        )
    }

    /// Caller-facing message. Hides which part of a plan/secret pair was
    /// wrong and never exposes storage details.
    pub fn public_message(&self) -> String {
        match self {
            e if e.is_not_found() => NOT_FOUND_MESSAGE.to_string(),
            BailoutError::InvalidInput { reason, .. } => reason.clone(),
            _ => INTERNAL_MESSAGE.to_string(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BailoutError::database(message).with_source(e))
    }
}

/// Result type alias for bailout operations
pub type Result<T> = std::result::Result<T, BailoutError>;

#[cfg(test)]
mod tests {
    use rusqlite::ffi;

    use super::*;

    fn sqlite_failure(code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(code), None)
    }

    #[test]
    fn test_busy_is_classified_as_conflict() {
        let err = BailoutError::database("Failed to begin transaction")
            .with_source(sqlite_failure(ffi::SQLITE_BUSY));
        assert!(matches!(err, BailoutError::TransactionConflict { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_other_sqlite_errors_stay_database_errors() {
        let err = BailoutError::database("Failed to insert plan")
            .with_source(sqlite_failure(ffi::SQLITE_CONSTRAINT));
        assert!(matches!(err, BailoutError::Database { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_not_found_class_is_opaque() {
        assert_eq!(BailoutError::NotFound.public_message(), NOT_FOUND_MESSAGE);
        assert_eq!(
            BailoutError::InvalidParticipant.public_message(),
            NOT_FOUND_MESSAGE
        );
        assert!(!BailoutError::NotFound.is_retryable());
        assert!(!BailoutError::InvalidParticipant.is_retryable());
    }

    #[test]
    fn test_internal_failures_are_generic() {
        let err = BailoutError::RetriesExhausted {
            attempts: 3,
            source: Box::new(BailoutError::TransactionConflict {
                message: "database is locked".to_string(),
            }),
        };
        assert_eq!(err.public_message(), INTERNAL_MESSAGE);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = BailoutError::invalid_input("num_participants")
            .with_reason("Number of participants must be between 2 and 5.");
        assert_eq!(
            err.public_message(),
            "Number of participants must be between 2 and 5."
        );
        assert!(err.to_string().contains("num_participants"));
    }
}
