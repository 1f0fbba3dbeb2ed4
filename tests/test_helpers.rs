use chrono::NaiveDate;
use reverie::db::Database;
use tempfile::TempDir;

pub const TEST_OWNER: &str = "user@example.com";
pub const OTHER_OWNER: &str = "other@example.com";

/// Opens a schema-initialized database in a fresh temp directory.
///
/// The `TempDir` must be kept alive for the lifetime of the database.
pub fn open_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let db = Database::open(&temp_dir.path().join("journal.db")).expect("open database");
    db.initialize_schema().expect("initialize schema");
    (temp_dir, db)
}

/// Fixed date for deterministic tests.
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid fixed date")
}

/// Fixed date offset by `days` from the base test date.
pub fn fixed_date_plus(days: u64) -> NaiveDate {
    fixed_date() + chrono::Days::new(days)
}
