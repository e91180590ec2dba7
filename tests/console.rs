//! Console Menu Integration Tests
//!
//! Drives the menu loop with scripted input and checks the printed output.

use std::io::Cursor;

use libris::cli::Console;
use libris::Library;

/// Run a scripted session against a fresh in-memory library
fn run_session(script: &str) -> (String, Library) {
    let library = Library::open_in_memory().unwrap();
    run_session_with(library, script)
}

fn run_session_with(library: Library, script: &str) -> (String, Library) {
    run_session_bytes(library, script.as_bytes())
}

fn run_session_bytes(library: Library, script: &[u8]) -> (String, Library) {
    let mut output = Vec::new();
    let mut console = Console::new(library, Cursor::new(script), &mut output);
    console.run().unwrap();
    let library = console.into_library();
    (String::from_utf8(output).unwrap(), library)
}

#[test]
fn test_menu_is_printed_and_exit_says_goodbye() {
    let (output, _) = run_session("7\n");

    assert!(output.contains(" Library Management System"));
    for line in [
        "1. Display Books",
        "2. Add Book",
        "3. Return Book",
        "4. Display Categories",
        "5. Add Category",
        "6. Issue Book",
        "7. Exit",
    ] {
        assert!(output.contains(line), "menu missing {:?}", line);
    }
    assert!(output.contains("Enter your choice (1-7): "));
    assert!(output.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_empty_listings() {
    let (output, _) = run_session("1\n4\n7\n");

    assert!(output.contains("No books in the library."));
    assert!(output.contains("No categories found."));
}

#[test]
fn test_invalid_choice_reprompts() {
    let (output, _) = run_session("9\nhello\n7\n");

    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    // Menu shown once per prompt
    assert_eq!(output.matches("Enter your choice (1-7): ").count(), 3);
    assert!(output.contains("Goodbye!"));
}

#[test]
fn test_add_issue_return_session() {
    let script = "\
2
Dune
Herbert
Sci-Fi
6
Dune
6
Dune
1
3
Dune
3
Dune
4
7
";
    let (output, library) = run_session(script);

    assert!(output.contains("Book added successfully!"));
    assert_eq!(output.matches("Book issued successfully!").count(), 1);
    assert_eq!(output.matches("Book not available for issuing.").count(), 1);
    assert!(output.contains("Available books:"));
    assert!(output.contains(
        "Title: Dune, Author: Herbert, Category: Sci-Fi, Status: Not Available"
    ));
    assert_eq!(output.matches("Book returned successfully!").count(), 1);
    assert_eq!(
        output.matches("Book already returned or not found.").count(),
        1
    );
    assert!(output.contains("Available categories:"));
    assert!(output.contains("Category: Sci-Fi"));

    let listing = library.display_books().unwrap();
    assert!(listing.entries()[0].book.is_available());
}

#[test]
fn test_add_category_does_not_deduplicate() {
    let (output, library) = run_session("5\nHistory\n5\nHistory\n4\n7\n");

    assert_eq!(output.matches("Category added successfully!").count(), 2);
    assert_eq!(output.matches("Category: History").count(), 2);
    assert_eq!(library.display_categories().unwrap().len(), 2);
}

#[test]
fn test_blank_answer_skips_action() {
    let (output, library) = run_session("5\n   \n2\n\n7\n");

    assert_eq!(output.matches("A value is required.").count(), 2);
    assert!(!output.contains("Category added successfully!"));
    assert!(!output.contains("Book added successfully!"));
    assert!(library.display_categories().unwrap().is_empty());
    assert!(library.display_books().unwrap().is_empty());
}

#[test]
fn test_answers_are_stored_as_typed() {
    let (output, library) = run_session("2\n  Dune  \n Herbert\nSci-Fi\r\n6\nDune\n7\n");

    let listing = library.display_books().unwrap();
    let record = &listing.entries()[0];
    assert_eq!(record.book.title, "  Dune  ");
    assert_eq!(record.book.author, " Herbert");
    assert_eq!(record.category_name, "Sci-Fi");

    // Title lookup is exact, so the unpadded title does not match
    assert!(output.contains("Book not available for issuing."));
    assert!(record.book.is_available());
}

#[test]
fn test_padded_choice_is_invalid() {
    let (output, _) = run_session(" 1 \n7\n");

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(!output.contains("No books in the library."));
}

#[test]
fn test_undecodable_choice_reprompts() {
    let library = Library::open_in_memory().unwrap();
    let (output, _) = run_session_bytes(library, b"\xff\xfe\n7\n");

    let invalid = output.find("Invalid choice. Please try again.").unwrap();
    let goodbye = output.find("Goodbye!").unwrap();
    assert!(invalid < goodbye);
}

#[test]
fn test_blank_title_falls_through_to_lookup() {
    let (output, _) = run_session("6\n\n3\n\n7\n");

    assert!(!output.contains("A value is required."));
    assert!(output.contains("Book not available for issuing."));
    assert!(output.contains("Book already returned or not found."));
}

#[test]
fn test_end_of_input_ends_session() {
    let (output, _) = run_session("1\n");
    assert!(output.contains("No books in the library."));
    assert!(!output.contains("Goodbye!"));

    // Input ending in the middle of Add Book stores nothing
    let (_, library) = run_session("2\nDune\n");
    assert!(library.display_books().unwrap().is_empty());
}

#[test]
fn test_session_works_on_existing_library() {
    let mut library = Library::open_in_memory().unwrap();
    library.add_book("Emma", "Austen", "Classics").unwrap();
    library.issue_book("Emma").unwrap();

    let (output, _) = run_session_with(library, "3\nEmma\n1\n7\n");

    assert!(output.contains("Book returned successfully!"));
    assert!(output.contains(
        "Title: Emma, Author: Austen, Category: Classics, Status: Available"
    ));
}
