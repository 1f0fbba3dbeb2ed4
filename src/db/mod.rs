//! Database operations for journal entries.
//!
//! This module provides SQLite database operations for storing sentiment-tagged
//! journal entries. It uses connection pooling via r2d2 so the embedding web
//! application can serve requests from multiple worker threads.
//!
//! # Module Structure
//!
//! - `schema`: Table definitions and schema initialization
//! - `entries`: Entry CRUD operations
//! - `query`: Owner-scoped filtered retrieval
//!
//! # Example
//!
//! ```no_run
//! use reverie::db::Database;
//! use std::path::Path;
//!
//! let db_path = Path::new("/tmp/reverie.db");
//! let db = Database::open(db_path)?;
//! db.initialize_schema()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod entries;
pub mod query;
pub mod schema;

use crate::constants::DB_POOL_SIZE;
use crate::errors::AppResult;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use tracing::{debug, info};

/// Type alias for a pooled SQLite connection.
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database handle with connection pooling.
///
/// This struct manages the SQLite journal store. The connection pool allows
/// multiple concurrent read/query operations while SQLite itself guarantees
/// single-statement atomicity for writes.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Opens or creates the SQLite journal database.
    ///
    /// If the database file doesn't exist, it will be created. The containing
    /// directory must already exist (see `config::ensure_db_directory_exists`).
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the database file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database file cannot be opened or is not a valid SQLite database
    /// - Connection pool cannot be initialized
    pub fn open(db_path: &Path) -> AppResult<Self> {
        debug!("Opening database at: {:?}", db_path);

        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(DB_POOL_SIZE)
            .build(manager)
            .map_err(crate::errors::DatabaseError::Pool)?;

        // Test the connection and verify the file is a usable database
        let conn = pool.get().map_err(crate::errors::DatabaseError::Pool)?;
        conn.execute_batch("PRAGMA quick_check")
            .map_err(crate::errors::DatabaseError::Sqlite)?;
        drop(conn);

        info!("Database opened successfully");
        Ok(Database { pool })
    }

    /// Gets a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or the pool is exhausted.
    pub fn get_conn(&self) -> AppResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| crate::errors::DatabaseError::Pool(e).into())
    }

    /// Initializes the database schema.
    ///
    /// Creates all necessary tables and indexes if they don't exist.
    /// This is idempotent and safe to call multiple times.
    ///
    /// # Errors
    ///
    /// Returns an error if schema creation fails.
    pub fn initialize_schema(&self) -> AppResult<()> {
        let conn = self.get_conn()?;
        schema::create_tables(&conn)?;
        info!("Database schema initialized");
        Ok(())
    }
}
