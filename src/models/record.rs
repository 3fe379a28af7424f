//! Contact record model
//!
//! A record groups one person's name, phone numbers and optional birthday.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::{Birthday, FieldError, Name, Phone};
use crate::error::{ContactError, ContactResult};

/// One contact in the address book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identity key, fixed once the record exists
    name: Name,

    /// Phone numbers in the order they were added
    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for the given name
    pub fn new(name: impl Into<String>) -> Result<Self, FieldError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    pub fn add_phone(&mut self, number: &str) -> Result<(), FieldError> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Remove every phone equal to `number`, returning how many were removed
    pub fn remove_phone(&mut self, number: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != number);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// The phone list is left untouched if `old` is missing or `new` is
    /// not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::phone_not_found(old))?;

        self.phones[index] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validate and set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, value: &str) -> Result<(), FieldError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
