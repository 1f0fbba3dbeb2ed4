//! Entry CRUD operations.
//!
//! This module provides functions for creating, reading, updating, and deleting
//! journal entries in the database. Owner scoping is not enforced here - callers
//! go through `db::query` to resolve an id to an entry the requesting principal
//! actually owns.

use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppResult, DatabaseError};
use crate::sentiment::Sentiment;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// Represents a journal entry in the database.
///
/// Tags are held as a normalized list in memory and comma-joined only at the
/// storage boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    /// Unique entry id (UUID v4), assigned at creation.
    pub id: String,
    /// Principal the entry belongs to. Sole access-partition key.
    pub owner: String,
    /// Free-form entry text.
    pub body: String,
    /// Sentiment label derived from `body` at write time.
    pub sentiment: Sentiment,
    /// Calendar date captured at creation.
    pub created_date: NaiveDate,
    /// Normalized tag labels.
    pub tags: Vec<String>,
}

/// Normalizes a raw comma-separated tag string into a clean tag list.
///
/// Splits on commas, trims whitespace, drops empty fragments, and de-duplicates
/// while preserving first-seen order.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for fragment in raw.split(',') {
        let tag = fragment.trim();
        if tag.is_empty() {
            continue;
        }
        if !tags.iter().any(|existing| existing == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

/// Comma-joins a tag list into its stored form.
pub(crate) fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Splits a stored tag string back into a tag list.
pub(crate) fn split_tags(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(',').map(|tag| tag.to_string()).collect()
}

/// Maps a database row to a `JournalEntry`.
///
/// Expects columns in the order: id, owner, body, sentiment, created_date, tags.
pub(crate) fn entry_from_row(row: &Row<'_>) -> Result<JournalEntry, rusqlite::Error> {
    let sentiment_raw: String = row.get(3)?;
    let sentiment = Sentiment::from_str(&sentiment_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            format!("unknown sentiment label: {}", sentiment_raw).into(),
        )
    })?;

    Ok(JournalEntry {
        id: row.get(0)?,
        owner: row.get(1)?,
        body: row.get(2)?,
        sentiment,
        created_date: NaiveDate::parse_from_str(&row.get::<_, String>(4)?, DATE_FORMAT_ISO)
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Text,
                    Box::new(e),
                )
            })?,
        tags: split_tags(&row.get::<_, String>(5)?),
    })
}

/// Inserts a new journal entry.
///
/// The caller is responsible for having assigned the id, derived the sentiment
/// from the body, and normalized the tags.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn insert_entry(conn: &Connection, entry: &JournalEntry) -> AppResult<()> {
    debug!("Inserting entry {}", entry.id);

    conn.execute(
        r#"
        INSERT INTO journal_entries (id, owner, body, sentiment, created_date, tags)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
        params![
            entry.id,
            entry.owner,
            entry.body,
            entry.sentiment.as_str(),
            entry.created_date.format(DATE_FORMAT_ISO).to_string(),
            join_tags(&entry.tags),
        ],
    )
    .map_err(DatabaseError::Sqlite)?;

    debug!("Entry {} inserted", entry.id);
    Ok(())
}

/// Retrieves an entry by id.
///
/// # Errors
///
/// Returns an error if the database operation fails.
/// Returns `Ok(None)` if no entry exists with the given id.
pub fn get_entry(conn: &Connection, id: &str) -> AppResult<Option<JournalEntry>> {
    debug!("Getting entry {}", id);

    let result = conn.query_row(
        r#"
        SELECT id, owner, body, sentiment, created_date, tags
        FROM journal_entries
        WHERE id = ?1
        "#,
        params![id],
        entry_from_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Overwrites the body, sentiment, and tags of an existing entry.
///
/// The caller recomputes the sentiment from the new body before calling -
/// the stored label always reflects the stored text.
///
/// # Errors
///
/// Returns `DatabaseError::NotFound` if no entry exists with the given id.
pub fn update_entry(
    conn: &Connection,
    id: &str,
    body: &str,
    sentiment: Sentiment,
    tags: &[String],
) -> AppResult<()> {
    debug!("Updating entry {}", id);

    let rows_affected = conn
        .execute(
            "UPDATE journal_entries SET body = ?1, sentiment = ?2, tags = ?3 WHERE id = ?4",
            params![body, sentiment.as_str(), join_tags(tags), id],
        )
        .map_err(DatabaseError::Sqlite)?;

    if rows_affected == 0 {
        return Err(DatabaseError::NotFound(format!("Entry with id {} not found", id)).into());
    }

    Ok(())
}

/// Removes an entry by id.
///
/// Idempotent - deleting a nonexistent id is not an error. Returns `true`
/// if a row was removed, `false` if the id was already absent.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_entry(conn: &Connection, id: &str) -> AppResult<bool> {
    debug!("Deleting entry {}", id);

    let rows_affected = conn
        .execute("DELETE FROM journal_entries WHERE id = ?1", params![id])
        .map_err(DatabaseError::Sqlite)?;

    Ok(rows_affected > 0)
}
