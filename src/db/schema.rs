//! Database schema definitions and initialization.
//!
//! This module defines the SQLite schema for journal entries. All tables are
//! created with the indexes the owner-scoped query paths rely on.

use crate::errors::{AppResult, DatabaseError};
use rusqlite::Connection;
use tracing::{debug, info};

/// Current schema version.
///
/// Increment this whenever schema changes are made to support future migrations.
pub const SCHEMA_VERSION: i32 = 1;

/// Creates all database tables and indexes.
///
/// This function is idempotent - it uses `CREATE TABLE IF NOT EXISTS`
/// so it's safe to call multiple times.
///
/// # Tables
///
/// - `journal_entries`: Sentiment-tagged journal entries, partitioned by owner
/// - `schema_version`: Schema version tracking
///
/// # Errors
///
/// Returns an error if any DDL statement fails.
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    debug!("Creating database tables");

    // Journal entries table: one row per entry, partitioned by owner.
    // The sentiment label is derived from the body at write time and is
    // constrained to the three values the classifier can produce.
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS journal_entries (
            id TEXT PRIMARY KEY,
            owner TEXT NOT NULL,
            body TEXT NOT NULL,
            sentiment TEXT NOT NULL CHECK(sentiment IN ('Positive', 'Neutral', 'Negative')),
            created_date DATE NOT NULL,
            tags TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_journal_entries_owner ON journal_entries(owner);
        CREATE INDEX IF NOT EXISTS idx_journal_entries_owner_date ON journal_entries(owner, created_date);
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Schema version tracking table
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL,
            applied_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );
        "#,
    )
    .map_err(DatabaseError::Sqlite)?;

    // Record schema version if not already recorded
    let current_version = get_schema_version(conn)?;
    if current_version.is_none() {
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?)",
            [SCHEMA_VERSION],
        )
        .map_err(DatabaseError::Sqlite)?;
        info!("Initialized database schema version {}", SCHEMA_VERSION);
    } else {
        debug!("Schema version already recorded: {:?}", current_version);
    }

    debug!("Database tables created successfully");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// Returns `None` if the schema_version table doesn't exist or is empty.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than missing table.
pub fn get_schema_version(conn: &Connection) -> AppResult<Option<i32>> {
    let result = conn.query_row(
        "SELECT version FROM schema_version ORDER BY applied_at DESC LIMIT 1",
        [],
        |row| row.get(0),
    );

    match result {
        Ok(version) => Ok(Some(version)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) if e.to_string().contains("no such table") => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_create_tables() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        // Verify journal_entries table exists
        let table_exists: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='journal_entries'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_exists, 1);

        // Verify schema_version table exists
        let table_exists: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='schema_version'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_exists, 1);
    }

    #[test]
    fn test_indexes_created() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        let index_count: i32 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='index' AND name LIKE 'idx_%'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(index_count, 2);
    }

    #[test]
    fn test_create_tables_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        // Create tables twice - should not error
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();

        // Version is recorded exactly once
        let versions: i32 = conn
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(versions, 1);
    }

    #[test]
    fn test_schema_version_recorded() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(get_schema_version(&conn).unwrap(), None);

        create_tables(&conn).unwrap();
        assert_eq!(get_schema_version(&conn).unwrap(), Some(SCHEMA_VERSION));
    }

    #[test]
    fn test_sentiment_check_constraint() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();

        // Valid sentiment labels should succeed
        conn.execute(
            "INSERT INTO journal_entries (id, owner, body, sentiment, created_date, tags) VALUES (?, ?, ?, ?, ?, ?)",
            ["a1", "user@example.com", "a fine day", "Neutral", "2025-01-01", ""],
        )
        .unwrap();

        // Invalid sentiment label should fail
        let result = conn.execute(
            "INSERT INTO journal_entries (id, owner, body, sentiment, created_date, tags) VALUES (?, ?, ?, ?, ?, ?)",
            ["a2", "user@example.com", "a fine day", "Ecstatic", "2025-01-01", ""],
        );
        assert!(result.is_err());
    }
}
