//! Results of store operations that have more than one non-error ending.

use crate::domain::{Book, Category};

/// Result of adding a book
#[derive(Debug, Clone)]
pub struct AddedBook {
    /// The newly stored book
    pub book: Book,

    /// The category it was filed under
    pub category: Category,

    /// Whether the category was created by this call
    pub category_created: bool,
}

/// Result of issuing a book by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    /// The first available copy with that title, now marked issued
    Issued(Book),

    /// No available copy with that title
    Unavailable,
}

impl IssueOutcome {
    /// Check if a copy was issued
    pub fn is_issued(&self) -> bool {
        matches!(self, Self::Issued(_))
    }
}

/// Result of returning a book by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The first issued copy with that title, now marked available
    Returned(Book),

    /// Already returned, or no such title
    NotIssued,
}

impl ReturnOutcome {
    /// Check if a copy was returned
    pub fn is_returned(&self) -> bool {
        matches!(self, Self::Returned(_))
    }
}

/// A listing that tells "nothing stored yet" apart from a populated result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Empty,
    Entries(Vec<T>),
}

impl<T> Listing<T> {
    /// Wrap query results, mapping no rows to [`Listing::Empty`]
    pub fn from_vec(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Entries(items)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Borrow the entries (empty slice for [`Listing::Empty`])
    pub fn entries(&self) -> &[T] {
        match self {
            Self::Empty => &[],
            Self::Entries(items) => items,
        }
    }
}

impl<T> IntoIterator for Listing<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Empty => Vec::new().into_iter(),
            Self::Entries(items) => items.into_iter(),
        }
    }
}
