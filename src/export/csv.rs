//! CSV Export functionality
//!
//! One row per contact with phones joined by `;`, for spreadsheets.

use std::io::Write;

use crate::error::{ContactError, ContactResult};
use crate::models::{AddressBook, Phone};

/// Export contacts to CSV
pub fn export_csv<W: Write>(book: &AddressBook, writer: &mut W) -> ContactResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Name", "Phones", "Birthday"])
        .map_err(|e| ContactError::Export(e.to_string()))?;

    for record in book.iter() {
        let phones = record
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(";");
        let birthday = record
            .birthday()
            .map(|b| b.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([record.name().as_str(), phones.as_str(), birthday.as_str()])
            .map_err(|e| ContactError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ContactError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_csv_export() {
        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.add_phone("5555555555").unwrap();
        john.add_birthday("15.06.1990").unwrap();

        let mut odd = Record::new("O'Neil, Pat").unwrap();
        odd.add_phone("0987654321").unwrap();

        let book = AddressBook::from_records(vec![john, odd]);

        let mut output = Vec::new();
        export_csv(&book, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert_eq!(
            csv,
            "Name,Phones,Birthday\n\
             John,1234567890;5555555555,15.06.1990\n\
             \"O'Neil, Pat\",0987654321,\n"
        );
    }

    #[test]
    fn test_csv_empty_book() {
        let mut output = Vec::new();
        export_csv(&AddressBook::new(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Name,Phones,Birthday\n");
    }
}
