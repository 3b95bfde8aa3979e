//! Record model representing a single contact.

use crate::domain::{Birthday, Name, Phone, ValidatedField};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the address book.
///
/// Serializes as `{"name": ..., "phones": [...], "birthday": ... | null}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Name of the contact, also its key in the address book
    name: Name,

    /// Phone numbers in insertion order; duplicates are kept
    #[serde(default)]
    phones: Vec<Phone>,

    /// Optional birthday
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a new record with a birthday.
    pub fn with_birthday(
        name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> BookResult<Self> {
        let mut record = Self::new(name)?;
        record.birthday = Some(Birthday::new(birthday)?);
        Ok(record)
    }

    /// The key this record is stored under.
    pub fn key(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's name. Renaming goes through
    /// [`AddressBook::rename`](crate::book::AddressBook::rename) so the key
    /// follows.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Copy of this record under a different name.
    pub(crate) fn renamed(mut self, name: impl Into<String>) -> BookResult<Self> {
        self.name.set(name)?;
        Ok(self)
    }

    /// Append a phone number. Duplicates are not checked.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> BookResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> BookResult<()> {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);

        if self.phones.len() == before {
            return Err(phone_not_found(phone));
        }
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before `old` is looked up.
    pub fn edit_phone(&mut self, old: &str, new: impl Into<String>) -> BookResult<()> {
        let new = Phone::validate(new)?;

        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| phone_not_found(old))?;

        slot.set(new)?;
        Ok(())
    }

    /// Replace the whole phone list with a single number.
    ///
    /// The list is left untouched when `phone` is invalid.
    pub fn replace_phones(&mut self, phone: impl Into<String>) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// The first stored phone, if any.
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: impl Into<String>) -> BookResult<()> {
        match self.birthday.as_mut() {
            Some(existing) => existing.set(birthday)?,
            None => self.birthday = Some(Birthday::new(birthday)?),
        }
        Ok(())
    }

    /// Days until the next birthday, counted from the local current date.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .as_ref()
            .map(|birthday| birthday.days_until_next(today))
    }

    /// True if the lowercased query occurs in the lowercased name, or the
    /// raw query occurs in any phone.
    pub fn matches(&self, query: &str) -> bool {
        let name_match = self
            .name
            .as_str()
            .to_lowercase()
            .contains(&query.to_lowercase());

        name_match || self.phones.iter().any(|p| p.as_str().contains(query))
    }
}

fn phone_not_found(phone: &str) -> BookError {
    BookError::NotFound(format!("Phone number '{}' not found", phone))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with(phones: &[&str]) -> Record {
        let mut record = Record::new("john doe").unwrap();
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = Record::new("alice").unwrap();
        assert_eq!(record.key(), "alice");
        assert!(record.phones.is_empty());
        assert!(record.birthday.is_none());
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_with_birthday_validates() {
        assert!(Record::with_birthday("alice", "1990-01-31").is_ok());
        let err = Record::with_birthday("alice", "1990-02-31").unwrap_err();
        assert!(matches!(err, BookError::InvalidValue(_)));
    }

    #[test]
    fn test_add_phone_keeps_duplicates() {
        let record = record_with(&["1111111111", "1111111111"]);
        assert_eq!(record.phones.len(), 2);
    }

    #[test]
    fn test_add_phone_invalid() {
        let mut record = record_with(&[]);
        let err = record.add_phone("12-34").unwrap_err();
        assert!(matches!(err, BookError::InvalidValue(_)));
        assert!(record.phones.is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        record.remove_phone("1111111111").unwrap();
        assert_eq!(record.phones, vec![Phone::new("2222222222").unwrap()]);
    }

    #[test]
    fn test_remove_phone_not_found() {
        let mut record = record_with(&["1111111111"]);
        let err = record.remove_phone("3333333333").unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut record = record_with(&["1111111111"]);
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phones, vec![Phone::new("2222222222").unwrap()]);
    }

    #[test]
    fn test_edit_phone_only_first_match() {
        let mut record = record_with(&["1111111111", "1111111111"]);
        record.edit_phone("1111111111", "2222222222").unwrap();
        assert_eq!(record.phones[0], "2222222222");
        assert_eq!(record.phones[1], "1111111111");
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = record_with(&["1111111111"]);
        let err = record.edit_phone("9999999999", "2222222222").unwrap_err();
        assert!(matches!(err, BookError::NotFound(_)));
    }

    #[test]
    fn test_edit_phone_invalid_new_checked_first() {
        let mut record = record_with(&["1111111111"]);
        let err = record.edit_phone("9999999999", "bad").unwrap_err();
        assert!(matches!(err, BookError::InvalidValue(_)));
        assert_eq!(record.phones[0], "1111111111");
    }

    #[test]
    fn test_replace_phones() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        record.replace_phones("3333333333").unwrap();
        assert_eq!(record.phones, vec![Phone::new("3333333333").unwrap()]);

        assert!(record.replace_phones("x").is_err());
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_set_birthday() {
        let mut record = record_with(&[]);
        record.set_birthday("1990-07-15").unwrap();
        assert!(record.set_birthday("1990-07-32").is_err());
        assert_eq!(record.birthday.as_ref().unwrap(), &"1990-07-15");
    }

    #[test]
    fn test_days_to_birthday_from() {
        let record = Record::with_birthday("alice", "1990-10-17").unwrap();
        assert_eq!(record.days_to_birthday_from(ymd(2026, 10, 17)), Some(0));
        assert_eq!(record.days_to_birthday_from(ymd(2026, 10, 18)), Some(364));
        assert_eq!(record.days_to_birthday_from(ymd(2027, 10, 18)), Some(365));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let record = Record::new("John Doe").unwrap();
        assert!(record.matches("doe"));
        assert!(record.matches("JOHN"));
        assert!(!record.matches("jane"));
    }

    #[test]
    fn test_matches_phone_substring() {
        let record = record_with(&["5559990000"]);
        assert!(record.matches("999"));
        assert!(!record.matches("888"));
    }

    #[test]
    fn test_display() {
        let record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(record.to_string(), "john doe: 1111111111, 2222222222");
        assert_eq!(Record::new("solo").unwrap().to_string(), "solo: ");
    }

    #[test]
    fn test_serialization_shape() {
        let record = record_with(&["1111111111"]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "john doe",
                "phones": ["1111111111"],
                "birthday": null
            })
        );
    }

    #[test]
    fn test_deserialization_round_trip() {
        let mut record = Record::with_birthday("jane", "1988-02-29").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("123").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserialization_rejects_invalid_phone() {
        let result: Result<Record, _> =
            serde_json::from_str(r#"{"name": "x", "phones": ["12-3"], "birthday": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialization_missing_optional_fields() {
        let record: Record = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(record.phones.is_empty());
        assert!(record.birthday.is_none());
    }
}
