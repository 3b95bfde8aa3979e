//! Contact Book - a command-line contact manager.
//!
//! Stores names, phone numbers and birthdays in a validated address book
//! and persists it to a local JSON file after every change.
//!
//! # Architecture
//!
//! - **domain**: Validated field types for names, phones and birthdays
//! - **models**: The contact record and its serialized form
//! - **book**: The address book container with search and paging
//! - **repositories**: Record persistence (JSON file)
//! - **services**: The session that owns the book and saves it
//! - **commands**: Text command parsing and dispatch
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use book::{AddressBook, Pages};
pub use commands::{Command, CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, FieldKind, Name, Phone, ValidatedField, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::Record;
pub use repositories::{JsonFileRepository, RecordRepository};
pub use services::{ContactService, ContactServiceImpl};
