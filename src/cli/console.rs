//! Interactive menu loop.
//!
//! Reads one choice per line, dispatches it to the [`Library`], prints the
//! outcome, and repeats until Exit is chosen or input ends.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::store::{IssueOutcome, Library, Listing, ReturnOutcome};

/// One of the seven menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayBooks,
    AddBook,
    ReturnBook,
    DisplayCategories,
    AddCategory,
    IssueBook,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::DisplayBooks,
        MenuChoice::AddBook,
        MenuChoice::ReturnBook,
        MenuChoice::DisplayCategories,
        MenuChoice::AddCategory,
        MenuChoice::IssueBook,
        MenuChoice::Exit,
    ];

    /// Parse a typed choice, "1" to "7" exactly
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::DisplayBooks),
            "2" => Some(Self::AddBook),
            "3" => Some(Self::ReturnBook),
            "4" => Some(Self::DisplayCategories),
            "5" => Some(Self::AddCategory),
            "6" => Some(Self::IssueBook),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DisplayBooks => "Display Books",
            Self::AddBook => "Add Book",
            Self::ReturnBook => "Return Book",
            Self::DisplayCategories => "Display Categories",
            Self::AddCategory => "Add Category",
            Self::IssueBook => "Issue Book",
            Self::Exit => "Exit",
        }
    }
}

/// Menu controller over any line source and output sink
pub struct Console<R, W> {
    library: Library,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Hand the library back so the caller can close it
    pub fn into_library(self) -> Library {
        self.library
    }

    /// Run the menu loop until Exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("Enter your choice (1-7): ")? else {
                writeln!(self.output)?;
                break;
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
                None => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\n Library Management System")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Run one menu action. Returns `false` when input ran out mid-action.
    fn dispatch(&mut self, choice: MenuChoice) -> Result<bool> {
        match choice {
            MenuChoice::DisplayBooks => self.display_books()?,
            MenuChoice::AddBook => {
                let title = match self.prompt_required("Enter book title: ")? {
                    Answer::Value(v) => v,
                    Answer::Blank => return Ok(true),
                    Answer::Closed => return Ok(false),
                };
                let author = match self.prompt_required("Enter author name: ")? {
                    Answer::Value(v) => v,
                    Answer::Blank => return Ok(true),
                    Answer::Closed => return Ok(false),
                };
                let category = match self.prompt_required("Enter book category: ")? {
                    Answer::Value(v) => v,
                    Answer::Blank => return Ok(true),
                    Answer::Closed => return Ok(false),
                };

                self.library
                    .add_book(&title, &author, &category)
                    .context("Failed to add book")?;
                writeln!(self.output, "Book added successfully!")?;
            }
            MenuChoice::ReturnBook => {
                let Some(title) = self.prompt("Enter the title of the book you are returning: ")? else {
                    return Ok(false);
                };

                match self.library.return_book(&title).context("Failed to return book")? {
                    ReturnOutcome::Returned(_) => writeln!(self.output, "Book returned successfully!")?,
                    ReturnOutcome::NotIssued => {
                        writeln!(self.output, "Book already returned or not found.")?
                    }
                }
            }
            MenuChoice::DisplayCategories => self.display_categories()?,
            MenuChoice::AddCategory => {
                let name = match self.prompt_required("Enter category name: ")? {
                    Answer::Value(v) => v,
                    Answer::Blank => return Ok(true),
                    Answer::Closed => return Ok(false),
                };

                self.library
                    .add_category(&name)
                    .context("Failed to add category")?;
                writeln!(self.output, "Category added successfully!")?;
            }
            MenuChoice::IssueBook => {
                let Some(title) = self.prompt("Enter the title of the book you want to issue: ")? else {
                    return Ok(false);
                };

                match self.library.issue_book(&title).context("Failed to issue book")? {
                    IssueOutcome::Issued(_) => writeln!(self.output, "Book issued successfully!")?,
                    IssueOutcome::Unavailable => {
                        writeln!(self.output, "Book not available for issuing.")?
                    }
                }
            }
            MenuChoice::Exit => return Ok(false),
        }

        Ok(true)
    }

    fn display_books(&mut self) -> Result<()> {
        match self.library.display_books().context("Failed to list books")? {
            Listing::Empty => writeln!(self.output, "No books in the library.")?,
            Listing::Entries(records) => {
                writeln!(self.output, "Available books:")?;
                for record in records {
                    writeln!(self.output, "{}", record)?;
                }
            }
        }
        Ok(())
    }

    fn display_categories(&mut self) -> Result<()> {
        match self
            .library
            .display_categories()
            .context("Failed to list categories")?
        {
            Listing::Empty => writeln!(self.output, "No categories found.")?,
            Listing::Entries(categories) => {
                writeln!(self.output, "Available categories:")?;
                for category in categories {
                    writeln!(self.output, "Category: {}", category.name)?;
                }
            }
        }
        Ok(())
    }

    /// Print `message` and read one line without its line ending. Bytes that
    /// are not UTF-8 are replaced, so they fail to match like any other typo.
    /// `None` means end of input.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }

        let decoded = String::from_utf8_lossy(&buf);
        let line: &str = decoded.as_ref();
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        Ok(Some(line.to_string()))
    }

    /// Like [`Console::prompt`], but a blank (or all-whitespace) answer
    /// prints a notice
    fn prompt_required(&mut self, message: &str) -> Result<Answer> {
        let Some(value) = self.prompt(message)? else {
            return Ok(Answer::Closed);
        };

        if value.trim().is_empty() {
            writeln!(self.output, "A value is required.")?;
            return Ok(Answer::Blank);
        }

        Ok(Answer::Value(value))
    }
}

/// What came back from a required prompt
enum Answer {
    Value(String),
    Blank,
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::DisplayBooks));
        assert_eq!(MenuChoice::parse("6"), Some(MenuChoice::IssueBook));
        assert_eq!(MenuChoice::parse(" 6 "), None);
        assert_eq!(MenuChoice::parse("7"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_menu_order_matches_numbers() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(MenuChoice::parse(&(i + 1).to_string()), Some(*choice));
        }
    }
}
