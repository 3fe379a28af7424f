//! Validated contact fields
//!
//! `Name`, `Phone` and `Birthday` can only be built from input that passes
//! validation. They serialize as their display strings and are re-validated
//! when a data file is read back.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digits in a phone number
pub const PHONE_DIGITS: usize = 10;

/// Display and input format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Last year a four-digit `DD.MM.YYYY` date can express
pub const MAX_YEAR: i32 = 9999;

/// A contact's name, the identity key in the address book
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Create a name, rejecting empty input
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.is_empty() {
            return Err(FieldError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

/// A ten digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Create a phone number; it must be exactly ten decimal digits
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.len() != PHONE_DIGITS || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldError::InvalidPhone(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Phone {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

/// A birthday, entered and displayed as `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`
    ///
    /// Day and month may be written with one or two digits. The date must
    /// exist on the calendar, so `31.04.2000` and `29.02.2023` are rejected.
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidBirthday(value.to_string());

        let parts: Vec<&str> = value.trim().split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| !is_number(p)) {
            return Err(invalid());
        }

        let day: u32 = parts[0].parse().map_err(|_| invalid())?;
        let month: u32 = parts[1].parse().map_err(|_| invalid())?;
        let year: i32 = parts[2].parse().map_err(|_| invalid())?;

        if parts[0].len() > 2 || parts[1].len() > 2 || !(1..=MAX_YEAR).contains(&year) {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The first anniversary falling on or after `today`
    ///
    /// A 29 February birthday is observed on 28 February in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.anniversary_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.anniversary_in(today.year() + 1)
        }
    }

    fn anniversary_in(&self, year: i32) -> NaiveDate {
        self.0
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Birthday {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

/// Validation errors for contact fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    InvalidPhone(String),
    InvalidBirthday(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(_) => write!(f, "Phone number must be a 10-digit number"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for FieldError {}
