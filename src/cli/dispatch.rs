//! Command dispatch
//!
//! Runs a parsed [`Command`] against the contact service and turns the
//! result, or the error, into the text shown to the user. Errors stop here;
//! none of them end the session.

use chrono::NaiveDate;

use super::command::{help_text, Command};
use crate::display::{format_contact_list, format_phone_list, format_upcoming_birthdays};
use crate::error::{ContactError, ContactResult};
use crate::services::{AddOutcome, ContactService};

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next command
    Continue(String),
    /// Save and leave the session
    Exit,
}

/// Execute one command
pub fn execute(
    service: &mut ContactService<'_>,
    command: Command,
    today: NaiveDate,
    window_days: u32,
) -> ContactResult<Outcome> {
    let reply = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Help => help_text(),
        Command::Exit => return Ok(Outcome::Exit),
        Command::Unknown(_) => "Invalid command.".to_string(),

        Command::Add { name, phone } => match service.add_contact(&name, &phone)? {
            AddOutcome::Added => "Contact added.".to_string(),
            AddOutcome::Updated => "Contact updated.".to_string(),
        },
        Command::Change { name, old, new } => {
            service.change_phone(&name, &old, &new)?;
            "Phone number updated for existing contact.".to_string()
        }
        Command::Phone { name } => format_phone_list(service.phones(&name)?),
        Command::RemovePhone { name, phone } => {
            service.remove_phone(&name, &phone)?;
            "Phone number removed.".to_string()
        }
        Command::All => format_contact_list(service.list()),
        Command::AddBirthday { name, date } => {
            service.add_birthday(&name, &date)?;
            "Birthday added to existing contact.".to_string()
        }
        Command::ShowBirthday { name } => match service.birthday(&name)? {
            Some(birthday) => birthday.to_string(),
            None => "No birthday information for this contact.".to_string(),
        },
        Command::Birthdays => {
            format_upcoming_birthdays(&service.upcoming_birthdays(today, window_days))
        }
        Command::Delete { name } => {
            service.delete(&name)?;
            "Contact deleted.".to_string()
        }
    };

    Ok(Outcome::Continue(reply))
}

/// Translate an error into the message shown to the user
pub fn error_message(err: &ContactError) -> String {
    match err {
        ContactError::Validation(message) => message.clone(),
        ContactError::NotFound {
            entity_type: "Contact",
            ..
        } => "Contact not found.".to_string(),
        ContactError::NotFound {
            entity_type: "Phone",
            ..
        } => "Phone number not found for this contact.".to_string(),
        ContactError::NotFound {
            entity_type,
            identifier,
        } => format!("{} not found: {}", entity_type, identifier),
        ContactError::Argument { usage, .. } => format!("Invalid arguments. Usage: {}", usage),
        other => other.to_string(),
    }
}
