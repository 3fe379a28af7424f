//! Contact service
//!
//! Business logic the command layer calls into. Every change to a record
//! goes through here so it can be audited.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ContactError, ContactResult};
use crate::models::{Birthday, Phone, Record, UpcomingBirthday};
use crate::storage::Storage;

/// What `add_contact` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new contact was created
    Added,
    /// The phone was appended to an existing contact
    Updated,
}

/// Service for contact management
pub struct ContactService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ContactService<'a> {
    /// Create a new contact service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a phone to a contact, creating the contact if needed
    ///
    /// The phone is validated before anything is created, so a bad number
    /// never leaves an empty contact behind.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> ContactResult<AddOutcome> {
        let phone = Phone::new(phone)?;

        let existing = self.storage.contacts.book().find(name).cloned();
        match existing {
            Some(before) => {
                let record = self.record_mut(name)?;
                record.add_phone(phone.as_str())?;
                let after = record.clone();

                self.storage.log_update(
                    name,
                    &before,
                    &after,
                    Some(format!("phone {} added", phone)),
                )?;
                debug!(contact = name, "phone added to existing contact");
                Ok(AddOutcome::Updated)
            }
            None => {
                let mut record = Record::new(name)?;
                record.add_phone(phone.as_str())?;

                self.storage.contacts.book_mut().add_record(record.clone());
                self.storage.log_create(name, &record)?;
                debug!(contact = name, "contact created");
                Ok(AddOutcome::Added)
            }
        }
    }

    /// Replace `old` with `new` in a contact's phone list
    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> ContactResult<()> {
        let record = self.record_mut(name)?;
        let before = record.clone();
        record.edit_phone(old, new)?;
        let after = record.clone();

        self.storage
            .log_update(name, &before, &after, Some(format!("phone {} -> {}", old, new)))
    }

    /// Remove every occurrence of a phone from a contact
    pub fn remove_phone(&mut self, name: &str, phone: &str) -> ContactResult<usize> {
        let record = self.record_mut(name)?;
        let before = record.clone();
        let removed = record.remove_phone(phone);
        if removed == 0 {
            return Err(ContactError::phone_not_found(phone));
        }
        let after = record.clone();

        self.storage
            .log_update(name, &before, &after, Some(format!("phone {} removed", phone)))?;
        Ok(removed)
    }

    /// Phones of a contact, in the order they were added
    pub fn phones(&self, name: &str) -> ContactResult<&[Phone]> {
        Ok(self.record(name)?.phones())
    }

    /// Set or replace a contact's birthday
    pub fn add_birthday(&mut self, name: &str, value: &str) -> ContactResult<()> {
        let record = self.record_mut(name)?;
        let before = record.clone();
        record.add_birthday(value)?;
        let after = record.clone();

        let summary = after
            .birthday()
            .map(|birthday| format!("birthday set to {}", birthday));
        self.storage.log_update(name, &before, &after, summary)
    }

    /// A contact's birthday, if one is recorded
    pub fn birthday(&self, name: &str) -> ContactResult<Option<&Birthday>> {
        Ok(self.record(name)?.birthday())
    }

    /// Delete a contact
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let record = self.storage.contacts.book_mut().delete(name)?;
        self.storage.log_delete(name, &record)?;
        debug!(contact = name, "contact deleted");
        Ok(record)
    }

    /// Merge records into the book; a record replaces any contact with the
    /// same name. Returns how many contacts were new.
    pub fn import_records(&mut self, records: Vec<Record>) -> ContactResult<usize> {
        let mut created = 0;
        for record in records {
            let name = record.name().as_str().to_string();
            match self.storage.contacts.book_mut().add_record(record.clone()) {
                Some(before) => self.storage.log_update(
                    &name,
                    &before,
                    &record,
                    Some("replaced by import".to_string()),
                )?,
                None => {
                    created += 1;
                    self.storage.log_create(&name, &record)?;
                }
            }
        }
        debug!(created, "import merged into address book");
        Ok(created)
    }

    /// All contacts in insertion order
    pub fn list(&self) -> &[Record] {
        self.storage.contacts.book().records()
    }

    /// Birthdays to congratulate within `window_days` of `today`
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        self.storage
            .contacts
            .book()
            .upcoming_birthdays(today, window_days)
    }

    fn record(&self, name: &str) -> ContactResult<&Record> {
        self.storage
            .contacts
            .book()
            .find(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }

    fn record_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.storage
            .contacts
            .book_mut()
            .find_mut(name)
            .ok_or_else(|| ContactError::contact_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ContactPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContactPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load().unwrap();
        (temp_dir, storage)
    }

    fn phone_strings(service: &ContactService, name: &str) -> Vec<String> {
        service
            .phones(name)
            .unwrap()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn test_add_contact_creates_then_updates() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);

        assert_eq!(
            service.add_contact("John", "1234567890").unwrap(),
            AddOutcome::Added
        );
        assert_eq!(
            service.add_contact("John", "5555555555").unwrap(),
            AddOutcome::Updated
        );

        assert_eq!(service.list().len(), 1);
        assert_eq!(phone_strings(&service, "John"), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_add_contact_invalid_phone_creates_nothing() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);

        let err = service.add_contact("John", "12345").unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_change_phone() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();

        service.change_phone("John", "1234567890", "0987654321").unwrap();
        assert_eq!(phone_strings(&service, "John"), vec!["0987654321"]);
    }

    #[test]
    fn test_change_phone_errors() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();

        let err = service.change_phone("Jane", "1234567890", "0987654321").unwrap_err();
        assert!(matches!(err, ContactError::NotFound { entity_type: "Contact", .. }));

        let err = service.change_phone("John", "1111111111", "0987654321").unwrap_err();
        assert!(matches!(err, ContactError::NotFound { entity_type: "Phone", .. }));

        let err = service.change_phone("John", "1234567890", "bad").unwrap_err();
        assert!(err.is_validation());

        assert_eq!(phone_strings(&service, "John"), vec!["1234567890"]);
    }

    #[test]
    fn test_remove_phone() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();
        service.add_contact("John", "1234567890").unwrap();

        assert_eq!(service.remove_phone("John", "1234567890").unwrap(), 2);
        assert!(service.phones("John").unwrap().is_empty());

        let err = service.remove_phone("John", "1234567890").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_birthday() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();

        assert!(service.birthday("John").unwrap().is_none());

        service.add_birthday("John", "15.06.1990").unwrap();
        assert_eq!(
            service.birthday("John").unwrap().unwrap().to_string(),
            "15.06.1990"
        );

        assert!(service.add_birthday("John", "31.04.1990").unwrap_err().is_validation());
        assert!(service.add_birthday("Jane", "15.06.1990").unwrap_err().is_not_found());
        assert!(service.birthday("Jane").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();

        let deleted = service.delete("John").unwrap();
        assert_eq!(deleted.name().as_str(), "John");
        assert!(service.phones("John").unwrap_err().is_not_found());
        assert!(service.delete("John").unwrap_err().is_not_found());
    }

    #[test]
    fn test_upcoming_birthdays() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();
        service.add_birthday("John", "13.06.1990").unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let upcoming = service.upcoming_birthdays(today, 5);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].formatted_date(), "13.06.2024");
    }

    #[test]
    fn test_import_records() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ContactService::new(&mut storage);
        service.add_contact("John", "1234567890").unwrap();

        let mut john = Record::new("John").unwrap();
        john.add_phone("5555555555").unwrap();
        let jane = Record::new("Jane").unwrap();

        assert_eq!(service.import_records(vec![john, jane]).unwrap(), 1);
        assert_eq!(service.list().len(), 2);
        assert_eq!(phone_strings(&service, "John"), vec!["5555555555"]);
    }

    #[test]
    fn test_changes_are_audited() {
        let (_temp_dir, mut storage) = create_test_storage();
        {
            let mut service = ContactService::new(&mut storage);
            service.add_contact("John", "1234567890").unwrap();
            service.add_contact("John", "5555555555").unwrap();
            service.change_phone("John", "5555555555", "6666666666").unwrap();
            service.add_birthday("John", "15.06.1990").unwrap();
            service.delete("John").unwrap();
            // Failed operations are not logged
            let _ = service.delete("John");
        }

        let entries = storage.audit().unwrap().read_all().unwrap();
        let operations: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(
            operations,
            vec![
                Operation::Create,
                Operation::Update,
                Operation::Update,
                Operation::Update,
                Operation::Delete,
            ]
        );
        assert_eq!(
            entries[3].summary.as_deref(),
            Some("birthday set to 15.06.1990")
        );
    }
}
