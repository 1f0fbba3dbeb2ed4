//! Owner-scoped filtered retrieval of journal entries.
//!
//! Every function in this module takes the requesting principal and builds the
//! owner predicate into the SQL unconditionally - no filter combination can
//! return another owner's entries. All filter parameters are bound, never
//! interpolated into the statement text.

use crate::constants::DATE_FORMAT_ISO;
use crate::db::entries::{entry_from_row, JournalEntry};
use crate::errors::{AppResult, DatabaseError};
use crate::sentiment::Sentiment;
use chrono::NaiveDate;
use rusqlite::{params, Connection, ToSql};
use std::collections::BTreeSet;
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT id, owner, body, sentiment, created_date, tags FROM journal_entries";

/// Composable filter for retrieving a single owner's entries.
///
/// All supplied filters are conjunctive: an entry must satisfy every one of
/// them to be included. The owner is the only mandatory field.
///
/// # Examples
///
/// ```
/// use reverie::db::query::EntryFilter;
/// use reverie::sentiment::Sentiment;
///
/// let filter = EntryFilter::for_owner("user@example.com")
///     .with_sentiment(Sentiment::Positive)
///     .with_tags(["gratitude"]);
/// ```
#[derive(Debug, Clone)]
pub struct EntryFilter {
    /// Principal whose entries are visible to this query.
    pub owner: String,
    /// Restrict to entries carrying this sentiment label.
    pub sentiment: Option<Sentiment>,
    /// Restrict to entries whose created date falls in this range, inclusive
    /// on both ends.
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Restrict to entries whose tag set contains every one of these tags.
    pub tags: Vec<String>,
    /// Restrict to entries whose body or tags contain this text,
    /// case-insensitively.
    pub search: Option<String>,
}

impl EntryFilter {
    /// Creates a filter that matches all of `owner`'s entries.
    pub fn for_owner(owner: impl Into<String>) -> Self {
        EntryFilter {
            owner: owner.into(),
            sentiment: None,
            date_range: None,
            tags: Vec::new(),
            search: None,
        }
    }

    /// Restricts the filter to entries with the given sentiment.
    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Restricts the filter to entries dated within `[start, end]`, inclusive.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    /// Restricts the filter to entries tagged with every given tag.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts the filter to entries whose body or tags contain `text`.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

/// Retrieves all entries matching the filter, ordered oldest first.
///
/// Entries are ordered ascending by created date, with the id as a
/// deterministic tiebreak for same-day entries. Presentation layers may
/// reverse for display.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_entries(conn: &Connection, filter: &EntryFilter) -> AppResult<Vec<JournalEntry>> {
    debug!("Listing entries");

    let mut sql = format!("{} WHERE owner = ?", SELECT_COLUMNS);
    let mut bindings: Vec<Box<dyn ToSql>> = vec![Box::new(filter.owner.clone())];

    if let Some(sentiment) = filter.sentiment {
        sql.push_str(" AND sentiment = ?");
        bindings.push(Box::new(sentiment.as_str()));
    }

    if let Some((start, end)) = filter.date_range {
        sql.push_str(" AND created_date BETWEEN ? AND ?");
        bindings.push(Box::new(start.format(DATE_FORMAT_ISO).to_string()));
        bindings.push(Box::new(end.format(DATE_FORMAT_ISO).to_string()));
    }

    // Exact tag membership against the comma-joined storage form: wrapping
    // both sides in commas means "art" cannot match an entry tagged "heart".
    for tag in &filter.tags {
        sql.push_str(" AND instr(',' || tags || ',', ',' || ? || ',') > 0");
        bindings.push(Box::new(tag.trim().to_string()));
    }

    if let Some(search) = &filter.search {
        sql.push_str(" AND (instr(lower(body), lower(?)) > 0 OR instr(lower(tags), lower(?)) > 0)");
        bindings.push(Box::new(search.clone()));
        bindings.push(Box::new(search.clone()));
    }

    sql.push_str(" ORDER BY created_date ASC, id ASC");

    let params: Vec<&dyn ToSql> = bindings.iter().map(|b| b.as_ref()).collect();
    let mut stmt = conn.prepare(&sql).map_err(DatabaseError::Sqlite)?;
    let rows = stmt
        .query_map(&params[..], entry_from_row)
        .map_err(DatabaseError::Sqlite)?;

    let mut entries = Vec::new();
    for row in rows {
        entries.push(row.map_err(DatabaseError::Sqlite)?);
    }

    debug!("Query matched {} entries", entries.len());
    Ok(entries)
}

/// Resolves an entry id to an entry the given principal owns.
///
/// Returns `Ok(None)` when the id does not exist or belongs to a different
/// owner - callers cannot distinguish the two cases, so no information about
/// other owners' entries leaks through this path.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn get_entry_scoped(
    conn: &Connection,
    owner: &str,
    id: &str,
) -> AppResult<Option<JournalEntry>> {
    debug!("Resolving entry {} for owner scope", id);

    let result = conn.query_row(
        &format!("{} WHERE id = ?1 AND owner = ?2", SELECT_COLUMNS),
        params![id, owner],
        entry_from_row,
    );

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(DatabaseError::Sqlite(e).into()),
    }
}

/// Lists the distinct tags across an owner's entries, sorted alphabetically.
///
/// When a date range is supplied it bounds the entries considered, inclusive
/// on both ends. The presentation layer uses this to build its tag picker for
/// the current window.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn list_tags(
    conn: &Connection,
    owner: &str,
    date_range: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<String>> {
    debug!("Listing distinct tags");

    let mut sql = String::from("SELECT tags FROM journal_entries WHERE owner = ? AND tags <> ''");
    let mut bindings: Vec<Box<dyn ToSql>> = vec![Box::new(owner.to_string())];

    if let Some((start, end)) = date_range {
        sql.push_str(" AND created_date BETWEEN ? AND ?");
        bindings.push(Box::new(start.format(DATE_FORMAT_ISO).to_string()));
        bindings.push(Box::new(end.format(DATE_FORMAT_ISO).to_string()));
    }

    let params: Vec<&dyn ToSql> = bindings.iter().map(|b| b.as_ref()).collect();
    let mut stmt = conn.prepare(&sql).map_err(DatabaseError::Sqlite)?;
    let rows = stmt
        .query_map(&params[..], |row| row.get::<_, String>(0))
        .map_err(DatabaseError::Sqlite)?;

    let mut tags = BTreeSet::new();
    for row in rows {
        let stored = row.map_err(DatabaseError::Sqlite)?;
        for tag in stored.split(',') {
            if !tag.is_empty() {
                tags.insert(tag.to_string());
            }
        }
    }

    Ok(tags.into_iter().collect())
}
