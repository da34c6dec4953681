//! SQLite schema for the dispatch register.
//!
//! The `dispatches` table layout is shared with existing data files, so the
//! column set and types must stay as they are.

/// Creates the dispatches table when it is missing.
pub const CREATE_DISPATCHES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS dispatches (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dispatch_no TEXT,
    today_nepali_date TEXT,
    subject TEXT,
    license_no TEXT,
    name TEXT,
    nagrita_no TEXT,
    father_name TEXT,
    dob TEXT,
    issue_date TEXT,
    expire_date TEXT,
    license_category TEXT,
    created_at TEXT
)
";
