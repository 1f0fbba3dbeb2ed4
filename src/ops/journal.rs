//! Save, edit, and delete operations for journal entries.
//!
//! These functions orchestrate validation, sentiment classification, and
//! persistence for the write path. The requesting principal and the request
//! date are threaded in explicitly - there is no ambient session state.

use crate::constants::JOURNAL_PROMPTS;
use crate::db::entries::{self, normalize_tags, JournalEntry};
use crate::db::{query, Database};
use crate::errors::{AppError, AppResult, DatabaseError};
use crate::sentiment;
use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

/// Saves a new journal entry for the given principal.
///
/// Rejects blank text, classifies the sentiment, assigns a fresh id and the
/// supplied creation date, and persists the record. Returns the stored entry.
///
/// # Arguments
///
/// * `db` - Database handle
/// * `owner` - Requesting principal (trusted, supplied by the auth layer)
/// * `body` - Entry text
/// * `tags` - Raw comma-separated tag input
/// * `today` - Creation date captured by the request handler
///
/// # Errors
///
/// Returns `AppError::Validation` if `body` is empty or whitespace-only, or a
/// database error if the write fails.
pub fn save_entry(
    db: &Database,
    owner: &str,
    body: &str,
    tags: &str,
    today: NaiveDate,
) -> AppResult<JournalEntry> {
    if body.trim().is_empty() {
        return Err(AppError::Validation(
            "Journal entry text cannot be empty".to_string(),
        ));
    }

    let entry = JournalEntry {
        id: Uuid::new_v4().to_string(),
        owner: owner.to_string(),
        body: body.to_string(),
        sentiment: sentiment::classify(body),
        created_date: today,
        tags: normalize_tags(tags),
    };

    let conn = db.get_conn()?;
    entries::insert_entry(&conn, &entry)?;

    info!(
        "Saved entry {} ({})",
        entry.id,
        entry.sentiment.as_str()
    );
    Ok(entry)
}

/// Replaces the text and tags of an existing entry.
///
/// The sentiment is recomputed from the new text before persistence, so the
/// stored label always matches the stored body. The entry must belong to the
/// requesting principal.
///
/// # Errors
///
/// Returns `AppError::Validation` if `body` is blank, or
/// `DatabaseError::NotFound` if the id does not exist or belongs to a
/// different owner.
pub fn update_entry(
    db: &Database,
    owner: &str,
    id: &str,
    body: &str,
    tags: &str,
) -> AppResult<JournalEntry> {
    if body.trim().is_empty() {
        return Err(AppError::Validation(
            "Journal entry text cannot be empty".to_string(),
        ));
    }

    let conn = db.get_conn()?;

    // Owner scoping happens here, not in the entry store: an id belonging to
    // another principal is indistinguishable from a missing one.
    let existing = query::get_entry_scoped(&conn, owner, id)?
        .ok_or_else(|| DatabaseError::NotFound(format!("Entry with id {} not found", id)))?;

    let new_sentiment = sentiment::classify(body);
    let new_tags = normalize_tags(tags);
    entries::update_entry(&conn, id, body, new_sentiment, &new_tags)?;

    info!("Updated entry {} ({})", id, new_sentiment.as_str());
    Ok(JournalEntry {
        body: body.to_string(),
        sentiment: new_sentiment,
        tags: new_tags,
        ..existing
    })
}

/// Deletes an entry belonging to the requesting principal.
///
/// Idempotent: returns `true` if an entry was removed, `false` if the id was
/// already absent (or belongs to a different owner). Neither case is an
/// error; the boolean is the caller's explicit not-found signal.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn delete_entry(db: &Database, owner: &str, id: &str) -> AppResult<bool> {
    let conn = db.get_conn()?;

    if query::get_entry_scoped(&conn, owner, id)?.is_none() {
        debug!("Delete of absent entry {} is a no-op", id);
        return Ok(false);
    }

    let removed = entries::delete_entry(&conn, id)?;
    info!("Deleted entry {}", id);
    Ok(removed)
}

/// Picks a writing prompt deterministically from the fixed prompt list.
///
/// The caller supplies the seed (a counter, a timestamp, whatever rotation it
/// wants), which keeps this function pure and the prompt copy in one place.
pub fn journal_prompt(seed: usize) -> &'static str {
    JOURNAL_PROMPTS[seed % JOURNAL_PROMPTS.len()]
}
