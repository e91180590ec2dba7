//! Category records.

use serde::{Deserialize, Serialize};

/// Category name shown for books stored without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A named grouping of books
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Row id assigned by storage
    pub id: i64,

    /// Display name (lookups match it exactly)
    pub name: String,
}
