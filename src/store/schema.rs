//! Table definitions.
//!
//! Column names and types match the files written by earlier releases
//! (`database.db`), so an existing inventory opens unchanged.

use rusqlite::Connection;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER NOT NULL PRIMARY KEY,
    name VARCHAR NOT NULL
);
CREATE TABLE IF NOT EXISTS books (
    id           INTEGER NOT NULL PRIMARY KEY,
    title        VARCHAR NOT NULL,
    author       VARCHAR NOT NULL,
    is_available BOOLEAN DEFAULT 1,
    category_id  INTEGER REFERENCES categories (id)
);
"#;

/// Enable foreign keys and create any missing tables
pub fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch(SCHEMA)
}
