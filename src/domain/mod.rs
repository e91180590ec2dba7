//! Domain types for the library inventory.
//!
//! - Category: a named grouping of books
//! - Book: a title/author record with an availability flag
//! - BookRecord: a book joined with its category name, as listed to users

pub mod book;
pub mod category;

pub use book::{Availability, Book, BookRecord};
pub use category::{Category, UNCATEGORIZED};
