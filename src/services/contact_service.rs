//! Contact service layer.
//!
//! Owns the address book for one session and writes it back through the
//! repository after every change.

use crate::book::AddressBook;
use crate::domain::Phone;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::repositories::RecordRepository;
use tracing::{debug, error, info};

/// Contact operations available to the command layer.
pub trait ContactService {
    /// Create a contact with one phone, replacing any contact of that name.
    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<()>;

    /// Replace the phones of an existing contact with a single number.
    fn change_contact(&mut self, name: &str, phone: &str) -> BookResult<()>;

    /// The first phone of a contact.
    fn get_phone(&self, name: &str) -> BookResult<&Phone>;

    /// Contacts matching a name or phone query.
    fn search(&self, query: &str) -> Vec<&Record>;

    /// Set the birthday of an existing contact.
    fn set_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()>;

    /// Days until a contact's next birthday, `None` if it has none.
    fn days_to_birthday(&self, name: &str) -> BookResult<Option<i64>>;

    /// Move a contact to a new name, replacing any contact already there.
    fn rename_contact(&mut self, old: &str, new: &str) -> BookResult<()>;

    /// Remove a contact. Returns whether it existed.
    fn delete_contact(&mut self, name: &str) -> BookResult<bool>;

    /// Read access to the whole book.
    fn book(&self) -> &AddressBook;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    book: AddressBook,
    repository: Box<dyn RecordRepository>,
}

impl ContactServiceImpl {
    /// Open a session, loading records from the repository.
    ///
    /// A load failure is logged and the session starts with an empty book.
    pub fn open(repository: Box<dyn RecordRepository>) -> Self {
        let book = match repository.load() {
            Ok(records) => {
                info!("Opened address book with {} records", records.len());
                records.into_iter().collect()
            }
            Err(e) => {
                error!("Error loading data: {}", e);
                AddressBook::new()
            }
        };

        Self { book, repository }
    }

    /// Create a session around an existing book without loading.
    pub fn with_book(book: AddressBook, repository: Box<dyn RecordRepository>) -> Self {
        Self { book, repository }
    }

    fn save(&self) -> BookResult<()> {
        let records: Vec<&Record> = self.book.records().collect();
        self.repository.save(&records)?;
        debug!("Persisted {} records", records.len());
        Ok(())
    }

    fn require(&self, name: &str) -> BookResult<&Record> {
        self.book.find(name).ok_or_else(|| contact_not_found(name))
    }

    fn require_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.book
            .find_mut(name)
            .ok_or_else(|| contact_not_found(name))
    }
}

fn contact_not_found(name: &str) -> BookError {
    BookError::NotFound(format!("Contact '{}' not found", name))
}

impl ContactService for ContactServiceImpl {
    fn add_contact(&mut self, name: &str, phone: &str) -> BookResult<()> {
        let mut record = Record::new(name)?;
        record.add_phone(phone)?;

        self.book.add_record(record);
        self.save()
    }

    fn change_contact(&mut self, name: &str, phone: &str) -> BookResult<()> {
        self.require_mut(name)?.replace_phones(phone)?;
        self.save()
    }

    fn get_phone(&self, name: &str) -> BookResult<&Phone> {
        self.require(name)?
            .first_phone()
            .ok_or_else(|| BookError::NotFound(format!("Contact '{}' has no phone numbers", name)))
    }

    fn search(&self, query: &str) -> Vec<&Record> {
        self.book.search(query)
    }

    fn set_birthday(&mut self, name: &str, birthday: &str) -> BookResult<()> {
        self.require_mut(name)?.set_birthday(birthday)?;
        self.save()
    }

    fn days_to_birthday(&self, name: &str) -> BookResult<Option<i64>> {
        Ok(self.require(name)?.days_to_birthday())
    }

    fn rename_contact(&mut self, old: &str, new: &str) -> BookResult<()> {
        if self.book.rename(old, new)?.is_some() {
            debug!("Rename replaced an existing contact");
        }
        self.save()
    }

    fn delete_contact(&mut self, name: &str) -> BookResult<bool> {
        if self.book.delete(name).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn book(&self) -> &AddressBook {
        &self.book
    }
}
