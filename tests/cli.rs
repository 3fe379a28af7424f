//! End-to-end tests for the `contacts` binary
//!
//! Every test points the binary at its own temporary data directory.

use assert_cmd::Command;
use chrono::Local;
use predicates::prelude::*;
use tempfile::TempDir;

fn contacts(data_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_contacts"));
    cmd.env("CONTACT_BOOK_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_session_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("hello\nadd John 1234567890\nadd John 5555555555\nall\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Welcome to the assistant bot!\n"))
        .stdout(predicate::str::contains("How can I help you?"))
        .stdout(predicate::str::contains("Contact added."))
        .stdout(predicate::str::contains("Contact updated."))
        .stdout(predicate::str::contains(
            "Contact name: John, phones: 1234567890; 5555555555",
        ))
        .stdout(predicate::str::ends_with("Address book saved. Good bye!\n"));
}

#[test]
fn test_session_reports_errors_and_continues() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("add John 12345\nphone Jane\nadd-birthday\ndance\nclose\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phone number must be a 10-digit number"))
        .stdout(predicate::str::contains("Contact not found."))
        .stdout(predicate::str::contains("Invalid arguments."))
        .stdout(predicate::str::contains("Invalid command."));
}

#[test]
fn test_contacts_persist_between_runs() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .arg("chat")
        .write_stdin("add John 1234567890\nadd-birthday John 15.06.1990\n")
        .assert()
        .success();

    assert!(data_dir.path().join("data").join("addressbook.json").exists());

    contacts(&data_dir)
        .write_stdin("show-birthday John\nphone John\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("15.06.1990"))
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn test_birthdays_subcommand() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .arg("birthdays")
        .assert()
        .success()
        .stdout(predicate::str::contains("No upcoming birthdays in the next week."));

    // Born in a leap year so the anniversary exists every day of the year
    let birthday = Local::now().date_naive().format("%d.%m.2000").to_string();
    contacts(&data_dir)
        .write_stdin(format!("add John 1234567890\nadd-birthday John {}\nexit\n", birthday))
        .assert()
        .success();

    contacts(&data_dir)
        .arg("birthdays")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("John: "));
}

#[test]
fn test_export_json_to_stdout() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .write_stdin("add John 1234567890\nexit\n")
        .assert()
        .success();

    contacts(&data_dir)
        .args(["export", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema_version\""))
        .stdout(predicate::str::contains("\"John\""))
        .stdout(predicate::str::contains("\"1234567890\""));
}

#[test]
fn test_export_then_import() {
    let source_dir = TempDir::new().unwrap();
    let target_dir = TempDir::new().unwrap();
    let export_file = source_dir.path().join("book.yaml");

    contacts(&source_dir)
        .write_stdin("add John 1234567890\nadd Jane 0987654321\nexit\n")
        .assert()
        .success();

    contacts(&source_dir)
        .args(["export", "--format", "yaml", "--output"])
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 contacts"));

    contacts(&target_dir)
        .arg("import")
        .arg(&export_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 contacts (2 new, 0 replaced)"));

    contacts(&target_dir)
        .write_stdin("all\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: John, phones: 1234567890"))
        .stdout(predicate::str::contains("Contact name: Jane, phones: 0987654321"));
}

#[test]
fn test_history_lists_changes() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes recorded."));

    contacts(&data_dir)
        .write_stdin("add John 1234567890\ndelete John\nexit\n")
        .assert()
        .success();

    contacts(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("John"));
}

#[test]
fn test_config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    contacts(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Book Configuration"))
        .stdout(predicate::str::contains("Birthday window (days): 5"))
        .stdout(predicate::str::contains(
            data_dir.path().to_string_lossy().to_string(),
        ));
}
