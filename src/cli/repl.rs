//! Interactive assistant session
//!
//! Reads commands line by line until `close`/`exit` or end of input, then
//! saves the address book once.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::command::Command;
use super::dispatch::{error_message, execute, Outcome};
use crate::config::Settings;
use crate::error::ContactResult;
use crate::services::ContactService;
use crate::storage::Storage;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Address book saved. Good bye!";

/// An interactive session over a loaded address book
pub struct Assistant<'a> {
    storage: &'a mut Storage,
    window_days: u32,
    /// Fixed date for the birthday query; the local date when unset
    today: Option<NaiveDate>,
}

impl<'a> Assistant<'a> {
    pub fn new(storage: &'a mut Storage, settings: &Settings) -> Self {
        Self {
            storage,
            window_days: settings.birthday_window_days,
            today: None,
        }
    }

    /// Pin "today" instead of reading the clock
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parse and run one line, translating any error into a reply
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let today = self.today();
        let window_days = self.window_days;
        let mut service = ContactService::new(self.storage);

        let result = Command::parse(line)
            .and_then(|command| execute(&mut service, command, today, window_days));

        match result {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(error = %err, "command failed");
                Outcome::Continue(error_message(&err))
            }
        }
    }

    /// Run the session until exit or end of input, then save
    ///
    /// Only I/O and save failures are returned; command errors are printed.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> ContactResult<()> {
        writeln!(output, "{}", GREETING)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let line = match lines.next() {
                Some(line) => line?,
                None => {
                    writeln!(output)?;
                    info!("end of input, closing session");
                    break;
                }
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.handle_line(line) {
                Outcome::Continue(reply) => writeln!(output, "{}", reply)?,
                Outcome::Exit => break,
            }
        }

        self.storage.save()?;
        writeln!(output, "{}", FAREWELL)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ContactPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_storage(temp_dir: &TempDir) -> Storage {
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load().unwrap();
        storage
    }

    fn run_session(storage: &mut Storage, script: &str) -> String {
        let mut output = Vec::new();
        Assistant::new(storage, &Settings::default())
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
            .run(Cursor::new(script), &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_session_transcript() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = create_test_storage(&temp_dir);

        let output = run_session(&mut storage, "hello\n\nadd John 1234567890\nexit\nall\n");

        assert_eq!(
            output,
            "Welcome to the assistant bot!\n\
             Enter a command: How can I help you?\n\
             Enter a command: Enter a command: Contact added.\n\
             Enter a command: Address book saved. Good bye!\n"
        );
    }

    #[test]
    fn test_session_saves_on_exit() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut storage = create_test_storage(&temp_dir);
            run_session(
                &mut storage,
                "add John 1234567890\nadd-birthday John 13.06.1990\nclose\n",
            );
        }

        let mut storage = create_test_storage(&temp_dir);
        let output = run_session(&mut storage, "all\nbirthdays\nexit\n");
        assert!(output.contains("Contact name: John, phones: 1234567890, birthday: 13.06.1990"));
        assert!(output.contains("John: 13.06.2024"));
    }

    #[test]
    fn test_session_saves_on_end_of_input() {
        let temp_dir = TempDir::new().unwrap();
        {
            let mut storage = create_test_storage(&temp_dir);
            let output = run_session(&mut storage, "add John 1234567890\n");
            assert!(output.ends_with("Enter a command: \nAddress book saved. Good bye!\n"));
        }

        let storage = create_test_storage(&temp_dir);
        assert!(storage.contacts.book().contains("John"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = create_test_storage(&temp_dir);

        let output = run_session(
            &mut storage,
            "add John 123\nphone Nobody\nadd\nfly\nadd John 1234567890\nexit\n",
        );

        assert!(output.contains("Phone number must be a 10-digit number"));
        assert!(output.contains("Contact not found."));
        assert!(output.contains("Invalid arguments. Usage: add <name> <phone>"));
        assert!(output.contains("Invalid command."));
        assert!(output.contains("Contact added."));
        assert!(output.ends_with("Address book saved. Good bye!\n"));
    }
}
