//! Configuration management for the reverie library.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the location of the
//! journal database file.
//!
//! # Environment Variables
//!
//! - `REVERIE_DB`: Path to the journal database file (defaults to ~/.reverie/journal.db)
//! - `HOME`: Used for expanding the default database path

use crate::constants::{DEFAULT_DB_SUBPATH, ENV_VAR_HOME, ENV_VAR_REVERIE_DB};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the reverie library.
///
/// This struct holds the configuration settings needed by the embedding
/// application, currently the path to the SQLite database file where journal
/// entries are stored.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use reverie::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     db_path: PathBuf::from("/path/to/journal.db"),
/// };
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use reverie::Config;
/// use std::env;
///
/// env::set_var("REVERIE_DB", "/custom/journal.db");
///
/// let config = Config::load().expect("Failed to load configuration");
/// ```
pub struct Config {
    /// Path to the SQLite database file where journal entries are stored.
    ///
    /// This is loaded from the REVERIE_DB environment variable with a fallback
    /// to ~/.reverie/journal.db if not specified.
    pub db_path: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("db_path", &"[REDACTED_PATH]")
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values.
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(""),
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    ///
    /// This is primarily useful for testing or when you want to start with defaults
    /// and then modify specific fields.
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// This method reads configuration from environment variables, with fallbacks
    /// for missing values. It will expand the database path using `shellexpand`
    /// to handle `~` and environment variable references.
    ///
    /// # Environment Variables
    ///
    /// - `REVERIE_DB`: Database file path (defaults to ~/.reverie/journal.db)
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The database path expansion fails
    /// - The resulting path is empty
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use reverie::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded configuration"),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        // Get database path from REVERIE_DB env var, fallback to ~/.reverie/journal.db
        let db_path_str = env::var(ENV_VAR_REVERIE_DB).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_else(|_| "".to_string());
            format!("{}/{}", home, DEFAULT_DB_SUBPATH)
        });

        // Expand the path (handles ~ and environment variables)
        let expanded_path = shellexpand::full(&db_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;

        let db_path = PathBuf::from(expanded_path.into_owned());

        // Validate the configuration
        if db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        debug!("Configuration loaded");
        Ok(Config { db_path })
    }

    /// Validates that the configuration is usable.
    ///
    /// This method checks if the configuration meets the minimum requirements:
    /// - Database path is not empty
    /// - Database path is absolute
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Database path is empty" if the database path is empty
    /// - "Database path must be an absolute path" if the path is relative
    ///
    /// # Examples
    ///
    /// ```
    /// use reverie::Config;
    /// use std::path::PathBuf;
    ///
    /// let valid_config = Config {
    ///     db_path: PathBuf::from("/absolute/path/journal.db"),
    /// };
    /// assert!(valid_config.validate().is_ok());
    ///
    /// let invalid_config = Config {
    ///     db_path: PathBuf::from(""),
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        if !self.db_path.is_absolute() {
            return Err(AppError::Config(
                "Database path must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}

/// Ensures the directory containing the database file exists, creating it if needed.
///
/// # Errors
///
/// Returns `AppError::Io` if the directory cannot be created.
pub fn ensure_db_directory_exists(db_path: &Path) -> AppResult<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating database directory");
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
