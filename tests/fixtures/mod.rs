//! Test fixtures and sample data.
//!
//! Reusable records and books for the integration tests.

use contact_book::{AddressBook, Record};

/// Create a record with a name and phones.
pub fn sample_record(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("names are always valid");
    for phone in phones {
        record.add_phone(*phone).expect("fixture phones are valid");
    }
    record
}

/// Create a record with a birthday.
#[allow(dead_code)]
pub fn sample_record_with_birthday(name: &str, phones: &[&str], birthday: &str) -> Record {
    let mut record = sample_record(name, phones);
    record.set_birthday(birthday).expect("fixture birthdays are valid");
    record
}

/// A small book with overlapping names and phones.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    [
        sample_record("John Doe", &["1234567890"]),
        sample_record("Jane Doe", &["5559990000", "5551112222"]),
        sample_record("Bob Smith", &["7778889999"]),
        sample_record("Alice", &[]),
    ]
    .into_iter()
    .collect()
}
