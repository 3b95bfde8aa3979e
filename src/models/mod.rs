//! Data models for address book entries.
//!
//! This module contains the record structure stored in the address book
//! and written to the data file.

pub mod record;

pub use record::Record;
