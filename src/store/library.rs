//! The library storage handle and its operations.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, info};

use super::error::StoreError;
use super::outcome::{AddedBook, IssueOutcome, Listing, ReturnOutcome};
use super::schema;
use crate::domain::{Availability, Book, BookRecord, Category, UNCATEGORIZED};

const BOOK_COLUMNS: &str = "id, title, author, is_available, category_id";

/// Storage handle over one SQLite connection
pub struct Library {
    conn: Connection,

    /// Database file, `None` for in-memory stores
    path: Option<PathBuf>,
}

impl Library {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        info!("Opened library database at {}", path.display());

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open a throwaway in-memory store
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;

        Ok(Self { conn, path: None })
    }

    /// Path of the backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Release the connection, surfacing any error SQLite reports on close
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, e)| StoreError::Sqlite(e))?;
        debug!("Closed library database");
        Ok(())
    }

    /// Add a book, filing it under `category_name`.
    ///
    /// The category is looked up by exact name and created when missing.
    /// No duplicate check is made on the book itself.
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        category_name: &str,
    ) -> Result<AddedBook, StoreError> {
        let tx = self.conn.transaction()?;

        let (category, category_created) = match find_category_in(&tx, category_name)? {
            Some(category) => (category, false),
            None => (insert_category(&tx, category_name)?, true),
        };

        tx.execute(
            "INSERT INTO books (title, author, is_available, category_id) VALUES (?1, ?2, 1, ?3)",
            params![title, author, category.id],
        )?;
        let book = Book {
            id: tx.last_insert_rowid(),
            title: title.to_string(),
            author: author.to_string(),
            availability: Availability::Available,
            category_id: Some(category.id),
        };

        tx.commit()?;

        info!(
            book_id = book.id,
            category_id = category.id,
            category_created,
            "Added book {:?} to category {:?}",
            book.title,
            category.name
        );

        Ok(AddedBook {
            book,
            category,
            category_created,
        })
    }

    /// All books in id order, each with its category name. Rows without a
    /// category (possible in files from earlier releases) are listed under
    /// [`UNCATEGORIZED`].
    pub fn display_books(&self) -> Result<Listing<BookRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT b.id, b.title, b.author, b.is_available, b.category_id, c.name
             FROM books b
             LEFT JOIN categories c ON c.id = b.category_id
             ORDER BY b.id",
        )?;

        let records = stmt
            .query_map([], |row| {
                Ok(BookRecord {
                    book: book_from_row(row)?,
                    category_name: row
                        .get::<_, Option<String>>(5)?
                        .unwrap_or_else(|| UNCATEGORIZED.to_string()),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = records.len(), "Listed books");
        Ok(Listing::from_vec(records))
    }

    /// Mark the first available copy of `title` as issued
    pub fn issue_book(&mut self, title: &str) -> Result<IssueOutcome, StoreError> {
        let Some(mut book) = self.first_with_status(title, Availability::Available)? else {
            info!("No available copy of {:?} to issue", title);
            return Ok(IssueOutcome::Unavailable);
        };

        self.set_availability(book.id, Availability::Issued)?;
        book.availability = Availability::Issued;
        info!(book_id = book.id, "Issued {:?}", book.title);

        Ok(IssueOutcome::Issued(book))
    }

    /// Mark the first issued copy of `title` as available again
    pub fn return_book(&mut self, title: &str) -> Result<ReturnOutcome, StoreError> {
        let Some(mut book) = self.first_with_status(title, Availability::Issued)? else {
            info!("No issued copy of {:?} to return", title);
            return Ok(ReturnOutcome::NotIssued);
        };

        self.set_availability(book.id, Availability::Available)?;
        book.availability = Availability::Available;
        info!(book_id = book.id, "Returned {:?}", book.title);

        Ok(ReturnOutcome::Returned(book))
    }

    /// Create a category. Unlike [`Library::add_book`], this does not reuse
    /// an existing category with the same name.
    pub fn add_category(&mut self, name: &str) -> Result<Category, StoreError> {
        let category = insert_category(&self.conn, name)?;
        info!(category_id = category.id, "Added category {:?}", category.name);
        Ok(category)
    }

    /// All categories in id order
    pub fn display_categories(&self) -> Result<Listing<Category>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id")?;

        let categories = stmt
            .query_map([], category_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = categories.len(), "Listed categories");
        Ok(Listing::from_vec(categories))
    }

    fn first_with_status(
        &self,
        title: &str,
        availability: Availability,
    ) -> Result<Option<Book>, StoreError> {
        let book = self
            .conn
            .query_row(
                &format!(
                    "SELECT {BOOK_COLUMNS} FROM books
                     WHERE title = ?1 AND COALESCE(is_available, 1) = ?2
                     ORDER BY id LIMIT 1"
                ),
                params![title, availability.is_available()],
                book_from_row,
            )
            .optional()?;

        Ok(book)
    }

    fn set_availability(&self, book_id: i64, availability: Availability) -> Result<(), StoreError> {
        self.conn.execute(
            "UPDATE books SET is_available = ?1 WHERE id = ?2",
            params![availability.is_available(), book_id],
        )?;
        Ok(())
    }
}

fn find_category_in(conn: &Connection, name: &str) -> rusqlite::Result<Option<Category>> {
    conn.query_row(
        "SELECT id, name FROM categories WHERE name = ?1 ORDER BY id LIMIT 1",
        [name],
        category_from_row,
    )
    .optional()
}

fn insert_category(conn: &Connection, name: &str) -> rusqlite::Result<Category> {
    conn.execute("INSERT INTO categories (name) VALUES (?1)", [name])?;
    Ok(Category {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}

fn category_from_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        availability: Availability::from_flag(row.get(3)?),
        category_id: row.get(4)?,
    })
}
