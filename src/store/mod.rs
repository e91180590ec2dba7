//! SQLite-backed data access for books and categories.
//!
//! A [`Library`] owns the single connection used for the whole session.
//! Open it at startup, call [`Library::close`] (or drop it) at shutdown.

pub mod error;
pub mod library;
pub mod outcome;
pub mod schema;

pub use error::StoreError;
pub use library::Library;
pub use outcome::{AddedBook, IssueOutcome, Listing, ReturnOutcome};
