//! Book records and availability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a book is on the shelf or checked out.
///
/// Stored as the boolean `is_available` column; issue and return are the
/// only transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// On the shelf, can be issued
    Available,

    /// Issued, can be returned
    Issued,
}

impl Availability {
    /// Map the stored flag. A missing value counts as available, which is
    /// the column default.
    pub fn from_flag(is_available: Option<bool>) -> Self {
        match is_available {
            Some(false) => Self::Issued,
            _ => Self::Available,
        }
    }

    /// The stored flag for this state
    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Issued => write!(f, "Not Available"),
        }
    }
}

/// A book as stored in the `books` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub availability: Availability,

    /// Owning category. Always set for books added by this program; files
    /// from earlier releases may hold rows without one.
    pub category_id: Option<i64>,
}

impl Book {
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }
}

/// A book joined with the name of its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub book: Book,
    pub category_name: String,
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Category: {}, Status: {}",
            self.book.title, self.book.author, self.category_name, self.book.availability
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flag_reads_as_available() {
        assert_eq!(Availability::from_flag(None), Availability::Available);
        assert_eq!(Availability::from_flag(Some(true)), Availability::Available);
        assert_eq!(Availability::from_flag(Some(false)), Availability::Issued);
    }

    #[test]
    fn test_record_display_line() {
        let record = BookRecord {
            book: Book {
                id: 1,
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                availability: Availability::Issued,
                category_id: Some(1),
            },
            category_name: "Sci-Fi".to_string(),
        };

        assert_eq!(
            record.to_string(),
            "Title: Dune, Author: Herbert, Category: Sci-Fi, Status: Not Available"
        );
    }
}
