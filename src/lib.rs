/*!
# Reverie

Reverie is the journal-entry store and mood-analytics core of a mental-wellness
web application. It persists sentiment-tagged journal entries per user and turns
filtered entry sets into mood-trend series and export documents.

## Core Features

- Save, edit, and delete journal entries, with sentiment derived from the text
  at every write
- Owner-scoped queries with conjunctive filters: sentiment, inclusive date
  range, tag set, and free-text search
- Mood-trend time series suitable for line-chart rendering
- CSV and flat-document export of filtered entry sets

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `db`: SQLite persistence (schema, entry CRUD, owner-scoped queries)
- `sentiment`: Lexicon-based sentiment classification
- `trend`: Mood-trend aggregation
- `export`: CSV and flat-document serialization
- `ops`: High-level operations the request handlers call

## Usage Example

```rust,no_run
use chrono::Utc;
use reverie::{ops, Config, Database, EntryFilter};

fn main() -> reverie::AppResult<()> {
    // Load configuration and open the store
    let config = Config::load()?;
    reverie::config::ensure_db_directory_exists(&config.db_path)?;
    let db = Database::open(&config.db_path)?;
    db.initialize_schema()?;

    // Save an entry for the authenticated principal
    let today = Utc::now().date_naive();
    let entry = ops::save_entry(
        &db,
        "user@example.com",
        "Today was amazing, I felt so grateful",
        "gratitude,work",
        today,
    )?;
    println!("Saved entry {} ({})", entry.id, entry.sentiment.as_str());

    // Export everything the user tagged "gratitude"
    let filter = EntryFilter::for_owner("user@example.com").with_tags(["gratitude"]);
    let csv = ops::csv_report(&db, &filter)?;
    println!("{}", csv);
    Ok(())
}
```
*/

/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// Database operations for journal entries
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// CSV and flat-document export
pub mod export;
/// High-level operations facade
pub mod ops;
/// Lexicon-based sentiment classification
pub mod sentiment;
/// Mood-trend aggregation
pub mod trend;

// Re-export important types for convenience
pub use config::Config;
pub use db::entries::JournalEntry;
pub use db::query::EntryFilter;
pub use db::Database;
pub use errors::{AppError, AppResult};
pub use sentiment::Sentiment;
pub use trend::{mood_trend, MoodTrend, TrendPoint};
