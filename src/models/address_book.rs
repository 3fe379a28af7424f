//! The address book: every contact record keyed by name
//!
//! Records keep the order in which their names were first added. Replacing a
//! record under an existing name keeps its original position.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashMap;
use std::fmt;

use super::fields::{BIRTHDAY_FORMAT, MAX_YEAR};
use super::record::Record;
use crate::error::{ContactError, ContactResult};

/// How many days ahead the birthday reminder looks by default
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 5;

/// In-memory contact store
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Index: name -> position in `records`
    index: HashMap<String, usize>,
}

/// A contact whose birthday falls inside the reminder window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Day to congratulate on, moved off the weekend
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    pub fn formatted_date(&self) -> String {
        self.date.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from records; later records win on duplicate names
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for record in records {
            book.add_record(record);
        }
        book
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// Returns the replaced record, if there was one.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.records[position], record)),
            None => {
                self.index.insert(key, self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.index.get(name) {
            Some(&position) => self.records.get_mut(position),
            None => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Remove a record by name
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let position = self
            .index
            .remove(name)
            .ok_or_else(|| ContactError::contact_not_found(name))?;

        let record = self.records.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Ok(record)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays to congratulate within `window_days` of `today`
    ///
    /// Each birthday's next occurrence is moved forward to Monday when it
    /// lands on a weekend, and the window is checked against the moved date.
    /// The window is inclusive; a birthday today is zero days away. Dates
    /// past year 9999 can't be written as `DD.MM.YYYY` and are skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = next_weekday(birthday.next_occurrence(today));
                if date.year() > MAX_YEAR {
                    return None;
                }
                let days_until = (date - today).num_days();

                (days_until <= i64::from(window_days)).then(|| UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                })
            })
            .collect()
    }

    /// `(name, DD.MM.YYYY)` pairs for birthdays in the default window
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<(String, String)> {
        self.upcoming_birthdays(today, DEFAULT_BIRTHDAY_WINDOW_DAYS)
            .into_iter()
            .map(|upcoming| {
                let date = upcoming.formatted_date();
                (upcoming.name, date)
            })
            .collect()
    }
}

/// Walk forward from `date` until it is a weekday
pub fn next_weekday(mut date: NaiveDate) -> NaiveDate {
    while matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }
    date
}
