//! Assistant command parsing
//!
//! Turns one line of user input into a [`Command`]. The keyword is matched
//! case-insensitively and arguments are split on whitespace.

use crate::error::{ContactError, ContactResult};

/// A parsed assistant command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old: String, new: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    Help,
    Exit,
    /// Anything that isn't a known keyword
    Unknown(String),
}

pub const ADD_USAGE: &str = "add <name> <phone>";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const PHONE_USAGE: &str = "phone <name>";
pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";
pub const REMOVE_PHONE_USAGE: &str = "remove-phone <name> <phone>";
pub const DELETE_USAGE: &str = "delete <name>";

impl Command {
    /// Parse a non-empty input line
    ///
    /// Commands that take arguments require exactly that many; commands
    /// without arguments ignore anything after the keyword.
    pub fn parse(line: &str) -> ContactResult<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = words.map(str::to_string).collect();

        let command = match keyword.as_str() {
            "hello" => Self::Hello,
            "all" => Self::All,
            "birthdays" => Self::Birthdays,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            "add" => {
                let [name, phone] = take_args::<2>(&keyword, args, ADD_USAGE)?;
                Self::Add { name, phone }
            }
            "change" => {
                let [name, old, new] = take_args::<3>(&keyword, args, CHANGE_USAGE)?;
                Self::Change { name, old, new }
            }
            "phone" => {
                let [name] = take_args::<1>(&keyword, args, PHONE_USAGE)?;
                Self::Phone { name }
            }
            "add-birthday" => {
                let [name, date] = take_args::<2>(&keyword, args, ADD_BIRTHDAY_USAGE)?;
                Self::AddBirthday { name, date }
            }
            "show-birthday" => {
                let [name] = take_args::<1>(&keyword, args, SHOW_BIRTHDAY_USAGE)?;
                Self::ShowBirthday { name }
            }
            "remove-phone" => {
                let [name, phone] = take_args::<2>(&keyword, args, REMOVE_PHONE_USAGE)?;
                Self::RemovePhone { name, phone }
            }
            "delete" => {
                let [name] = take_args::<1>(&keyword, args, DELETE_USAGE)?;
                Self::Delete { name }
            }
            _ => Self::Unknown(keyword),
        };

        Ok(command)
    }
}

fn take_args<const N: usize>(
    command: &str,
    args: Vec<String>,
    usage: &'static str,
) -> ContactResult<[String; N]> {
    args.try_into()
        .map_err(|_| ContactError::arguments(command, usage))
}

/// Summary printed by `help`
pub fn help_text() -> String {
    [
        "Available commands:",
        "  hello                                  Greet the assistant",
        "  add <name> <phone>                     Add a contact or a phone to it",
        "  change <name> <old phone> <new phone>  Replace a phone number",
        "  phone <name>                           Show a contact's phones",
        "  remove-phone <name> <phone>            Remove a phone number",
        "  all                                    Show all contacts",
        "  add-birthday <name> <DD.MM.YYYY>       Set a contact's birthday",
        "  show-birthday <name>                   Show a contact's birthday",
        "  birthdays                              Birthdays to congratulate soon",
        "  delete <name>                          Delete a contact",
        "  close, exit                            Save and quit",
    ]
    .join("\n")
}
