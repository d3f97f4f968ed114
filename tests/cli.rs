use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn flashcards() -> Command {
    Command::cargo_bin("flashcards").unwrap()
}

#[test]
fn test_add_deck_then_help_then_exit() {
    flashcards()
        .write_stdin("Add French Deck\nhelp\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Welcome to the flashcard application!\nWhat would you like to do?\n$ ",
        ))
        .stdout(predicate::str::contains("Deck name: French (0 card(s))"))
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_malformed_command_does_not_end_session() {
    flashcards()
        .arg("--no-banner")
        .write_stdin("foo bar\nAdd hola/hello flashcard to Spanish Deck\nhelp\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Malformed command 'foo bar'"))
        .stdout(predicate::str::contains("Deck name: Spanish (1 card(s))"))
        .stdout(predicate::str::contains("Welcome").not());
}

#[test]
fn test_end_of_input_says_goodbye() {
    flashcards()
        .write_stdin("Add Spanish Deck\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Goodbye!\n"));
}

#[test]
fn test_card_matching_by_value() {
    flashcards()
        .args(["--no-banner", "--card-matching", "value"])
        .write_stdin(
            "Add un/one flashcard to French Deck\n\
             Remove un/one flashcard from French Deck\n\
             help\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed flashcard un/one from deck French"))
        .stdout(predicate::str::contains("Deck name: French (0 card(s))"));
}

#[test]
fn test_card_matching_by_identity_reports_miss() {
    flashcards()
        .arg("--no-banner")
        .write_stdin(
            "Add un/one flashcard to French Deck\n\
             Remove un/one flashcard from French Deck\n\
             help\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Flashcard un/one not found in deck French",
        ))
        .stdout(predicate::str::contains("Deck name: French (1 card(s))"));
}

#[test]
fn test_script_replay() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "Add German Deck").unwrap();
    writeln!(script, "Add eins/one flashcard to German Deck").unwrap();
    writeln!(script, "Remove German Deck").unwrap();
    writeln!(script, "help").unwrap();

    flashcards()
        .args(["--no-banner", "--prompt", ""])
        .arg("--script")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed deck German (1 card(s))"))
        .stdout(predicate::str::contains("Deck name: German").not());
}

#[test]
fn test_missing_script_fails() {
    flashcards()
        .args(["--script", "/nonexistent/commands.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script file not found"));
}
