//! libris - console book inventory for a small library
//!
//! Books belong to categories and are either on the shelf or issued.
//! Everything is stored in one local SQLite file and driven from a
//! numbered text menu.
//!
//! # Modules
//!
//! - `domain`: Data structures (Book, Category, BookRecord)
//! - `store`: SQLite data access (Library)
//! - `config`: Database location resolution
//! - `cli`: Command-line entrypoint and menu loop
//!
//! # Usage
//!
//! ```bash
//! # Start the menu against ./database.db
//! libris
//!
//! # Use another database file
//! libris --database ~/books/inventory.db
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod store;

// Re-export main types at crate root for convenience
pub use domain::{Availability, Book, BookRecord, Category, UNCATEGORIZED};
pub use store::{AddedBook, IssueOutcome, Library, Listing, ReturnOutcome, StoreError};
