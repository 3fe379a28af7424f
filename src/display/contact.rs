//! Contact display formatting
//!
//! Formats records, phone lists and birthday reminders for terminal output.

use crate::audit::AuditEntry;
use crate::models::{Phone, Record, UpcomingBirthday};

/// One rendered record per line
pub fn format_contact_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No contacts found.".to_string();
    }

    records
        .iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One phone number per line
pub fn format_phone_list(phones: &[Phone]) -> String {
    if phones.is_empty() {
        return "No phone numbers for this contact.".to_string();
    }

    phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `name: DD.MM.YYYY` per upcoming birthday
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }

    upcoming
        .iter()
        .map(UpcomingBirthday::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Audit entries, oldest first
pub fn format_audit_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.".to_string();
    }

    entries
        .iter()
        .map(AuditEntry::format_human_readable)
        .collect::<Vec<_>>()
        .join("\n")
}
