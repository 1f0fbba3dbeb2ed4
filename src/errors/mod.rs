//! Error handling utilities for the reverie library.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the library, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// This enum provides detailed, contextual error information for different failure modes
/// when interacting with the SQLite journal store.
///
/// # Examples
///
/// ```
/// use reverie::errors::DatabaseError;
///
/// let error = DatabaseError::NotFound("Entry with id abc not found".to_string());
/// assert!(format!("{}", error).contains("not found"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other connections to the journal database.")]
    Pool(#[from] r2d2::Error),

    /// Requested entry not found in database.
    #[error("Entry not found: {0}")]
    NotFound(String),
}

/// Represents specific error cases that can occur while serializing an export.
///
/// Encoding limitations of the flat-document format are not represented here:
/// unsupported characters are substituted rather than treated as failures.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Failure flushing the export buffer.
    #[error("Export buffer error: {0}")]
    Io(#[from] io::Error),

    /// The CSV writer produced bytes that are not valid UTF-8.
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Represents all possible errors that can occur in the reverie library.
///
/// This enum is the central error type used across the library, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a validation error:
/// ```
/// use reverie::errors::AppError;
///
/// let error = AppError::Validation("Journal entry text cannot be empty".to_string());
/// assert_eq!(
///     format!("{}", error),
///     "Validation error: Journal entry text cannot be empty"
/// );
/// ```
///
/// Converting from an IO error:
/// ```
/// use reverie::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected caller input, such as a blank journal entry.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors related to database operations.
    ///
    /// This variant uses a dedicated DatabaseError type to provide detailed
    /// information about what went wrong with database operations.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Errors related to export serialization.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the library to represent operations
/// that may fail with an `AppError`.
///
/// # Examples
///
/// ```
/// use reverie::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     // Operation that could fail
///     if false {
///         return Err(AppError::Validation("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
