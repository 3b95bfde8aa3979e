//! The address book container.
//!
//! Records are keyed by name. The backing map is sorted, so iteration,
//! paging and saved files all follow the same deterministic key order.

use crate::domain::{Name, ValidatedField};
use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::btree_map;
use std::collections::BTreeMap;
use tracing::debug;

/// Keyed collection of all records, one per unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name.
    ///
    /// Returns the replaced record, if there was one. Nothing is merged.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.key().to_string();
        let previous = self.records.insert(key, record);
        if previous.is_some() {
            debug!("Replaced existing record");
        }
        previous
    }

    /// Exact lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact lookup by name for in-place mutation.
    ///
    /// The name of the returned record cannot change; use
    /// [`AddressBook::rename`] so the key follows.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Move the record stored under `old` to the key `new`.
    ///
    /// A record already stored under `new` is replaced and returned, as with
    /// [`AddressBook::add_record`].
    pub fn rename(&mut self, old: &str, new: &str) -> BookResult<Option<Record>> {
        Name::validate(new)?;
        let record = self
            .records
            .remove(old)
            .ok_or_else(|| BookError::NotFound(format!("Contact '{}' not found", old)))?;

        Ok(self.add_record(record.renamed(new)?))
    }

    /// Remove a record by name. Absent names are not an error.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// All records whose name contains the query (ignoring case) or whose
    /// phones contain the query verbatim.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        self.records
            .values()
            .filter(|record| record.matches(query))
            .collect()
    }

    /// Batches of up to `page_size` records in key order.
    ///
    /// A page size of 0 is treated as 1.
    pub fn iterator(&self, page_size: usize) -> Pages<'_> {
        Pages {
            inner: self.records.values(),
            page_size: page_size.max(1),
        }
    }

    /// All records in key order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

/// Lazy page iterator returned by [`AddressBook::iterator`].
///
/// It is consumed as it goes and cannot be restarted.
pub struct Pages<'a> {
    inner: btree_map::Values<'a, String, Record>,
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&'a Record> = self.inner.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}
