use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::io::Write;
use tempfile::tempdir;

fn librarian(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::new(cargo_bin!("librarian"));
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn test_add_book_and_user_then_view() {
    let dir = tempdir().unwrap();
    let input = "1\nDune\nFrank Herbert\nScience Fiction\n3\n\
                 3\nPaul\npaul@arrakis.example\n\
                 7\n0\n";

    librarian(&dir.path().join("library_data.json"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added."))
        .stdout(predicate::str::contains("User added. ID: "))
        .stdout(predicate::str::contains(
            "Dune by Frank Herbert [3 copies] (issued 0 times)",
        ))
        .stdout(predicate::str::contains("Paul borrowed: none"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_issue_with_unknown_user_is_reported_not_fatal() {
    let dir = tempdir().unwrap();
    let input = "1\nDune\nFrank Herbert\nScience Fiction\n1\n\
                 5\nno-such-user\nDune\n0\n";

    librarian(&dir.path().join("library_data.json"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("User not found"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_invalid_quantity_reprompts() {
    let dir = tempdir().unwrap();
    let input = "1\nDune\nFrank Herbert\nScience Fiction\nmany\n-2\n3\n0\n";

    librarian(&dir.path().join("library_data.json"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a non-negative whole number."))
        .stdout(predicate::str::contains("Book added."));
}

#[test]
fn test_unknown_option_keeps_session_alive() {
    let dir = tempdir().unwrap();

    librarian(&dir.path().join("library_data.json"))
        .write_stdin("42\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown option."))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_load_without_data_file_reports_missing() {
    let dir = tempdir().unwrap();

    librarian(&dir.path().join("library_data.json"))
        .write_stdin("10\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data file."));
}

#[test]
fn test_corrupt_snapshot_aborts_at_startup() {
    let dir = tempdir().unwrap();
    let data_file = dir.path().join("library_data.json");
    let mut file = std::fs::File::create(&data_file).unwrap();
    writeln!(file, "{{ definitely not a snapshot").unwrap();

    librarian(&data_file)
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Corrupt data file"));
}
