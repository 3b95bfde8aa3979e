//! Application service layer.
//!
//! Services contain the session logic between the command dispatcher and
//! the record repository: they own the address book, apply changes to it
//! and persist it after each change.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};
