//! Query-then-report compositions for the presentation layer.
//!
//! The mood dashboard fetches a filtered entry set and immediately aggregates
//! or serializes it. These helpers do that composition server-side so request
//! handlers stay one call deep: filter in, chart series or download bytes out.

use crate::db::entries::JournalEntry;
use crate::db::query::{self, EntryFilter};
use crate::db::Database;
use crate::errors::AppResult;
use crate::export;
use crate::trend::{self, MoodTrend};
use chrono::NaiveDate;
use tracing::debug;

/// Retrieves the entries matching `filter`, oldest first.
pub fn fetch_entries(db: &Database, filter: &EntryFilter) -> AppResult<Vec<JournalEntry>> {
    let conn = db.get_conn()?;
    query::list_entries(&conn, filter)
}

/// Builds the mood-trend series for the entries matching `filter`.
///
/// Returns `Ok(None)` when no entries match - the insufficient-data signal
/// the dashboard renders as a message instead of a chart.
pub fn mood_trend_report(db: &Database, filter: &EntryFilter) -> AppResult<Option<MoodTrend>> {
    let entries = fetch_entries(db, filter)?;
    debug!("Building mood trend over {} entries", entries.len());
    Ok(trend::mood_trend(&entries))
}

/// Serializes the entries matching `filter` to CSV.
///
/// # Errors
///
/// Returns an error if the query or the CSV serialization fails.
pub fn csv_report(db: &Database, filter: &EntryFilter) -> AppResult<String> {
    let entries = fetch_entries(db, filter)?;
    Ok(export::csv_export(&entries)?)
}

/// Serializes the entries matching `filter` to a flat Latin-1 document.
///
/// # Errors
///
/// Returns an error if the query fails. Encoding limitations degrade by
/// substitution and are not errors.
pub fn document_report(db: &Database, filter: &EntryFilter) -> AppResult<Vec<u8>> {
    let entries = fetch_entries(db, filter)?;
    Ok(export::document_export(&entries))
}

/// Lists the distinct tags across the owner's entries in an optional date
/// window, for building the dashboard's tag picker.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn available_tags(
    db: &Database,
    owner: &str,
    date_range: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<String>> {
    let conn = db.get_conn()?;
    query::list_tags(&conn, owner, date_range)
}
