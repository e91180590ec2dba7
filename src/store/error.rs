//! Errors raised by the store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or querying the library database
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to create database directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
