//! SQL DDL for initializing the people table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, assigned by storage on insert
/// - `name`, `email` free-form TEXT, no uniqueness or format constraints
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS people (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT
);
"#;
