//! Scripted runs of the contacts menu loop.

use std::io::Cursor;

use contacts::Session;
use rstest::rstest;

/// Runs a quiet session over `script` and returns the book size and output.
fn run(script: &str) -> (usize, String) {
    let mut session = Session::new(Cursor::new(script.as_bytes()), Vec::new()).quiet(true);
    session.run().unwrap();
    let (book, output) = session.into_parts();
    (book.len(), String::from_utf8(output).unwrap())
}

#[rstest]
fn test_add_then_list_all_is_sorted() {
    let script = "1\ncarol\n555-0102\ncarol@example.com\nn\n\
                  1\nalice\n555-0100\nalice@example.com\ny\n\
                  3\n6\n";
    let (size, output) = run(script);

    assert_eq!(size, 2);
    assert_eq!(
        output,
        "Contact added.\n\
         Contact added.\n\
         Contacts in alphabetical order:\n\
         alice - 555-0100 - alice@example.com [Favorite]\n\
         carol - 555-0102 - carol@example.com\n\
         Goodbye.\n"
    );
}

#[rstest]
fn test_duplicate_name_is_reported() {
    let script = "1\nx\n111\nx@example.com\nn\n1\nx\n222\nother@example.com\ny\n2\nx\n6\n";
    let (size, output) = run(script);

    assert_eq!(size, 1);
    assert!(output.contains("A contact named x already exists."));
    assert!(output.contains("Found: x, 111, x@example.com\n"));
}

#[rstest]
fn test_list_favorites_shows_name_and_phone() {
    let script = "1\nbob\n2\nbob@example.com\ns\n1\nann\n1\nann@example.com\nn\n4\n6\n";
    let (_, output) = run(script);

    assert!(output.contains("Favorites:\nbob - 2\nGoodbye.\n"));
}

#[rstest]
#[case::existing("1\nann\n1\na@example.com\nn\n5\nann\n6\n", 0, "Contact removed.")]
#[case::missing("5\nnobody\n6\n", 0, "Contact not found.")]
fn test_remove(#[case] script: &str, #[case] expected_size: usize, #[case] expected: &str) {
    let (size, output) = run(script);
    assert_eq!(size, expected_size);
    assert!(output.contains(expected));
}

#[rstest]
fn test_find_missing_contact() {
    let (_, output) = run("2\nghost\n6\n");
    assert_eq!(output, "Contact not found.\nGoodbye.\n");
}

#[rstest]
fn test_invalid_choice_is_reported_and_loop_continues() {
    let (_, output) = run("9\nhello\n6\n");
    assert_eq!(output, "Invalid option.\nInvalid option.\nGoodbye.\n");
}

#[rstest]
#[case::at_menu("")]
#[case::mid_prompt("1\nann\n")]
fn test_end_of_input_ends_session(#[case] script: &str) {
    let (size, output) = run(script);
    assert_eq!(size, 0);
    assert_eq!(output, "Goodbye.\n");
}

#[rstest]
fn test_menu_is_printed_when_not_quiet() {
    let mut session = Session::new(Cursor::new(b"6\n".as_slice()), Vec::new());
    session.run().unwrap();
    let (_, output) = session.into_parts();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("1. Add contact\n"));
    assert!(output.contains("6. Quit\n"));
    assert!(output.contains("Choice: "));
}
