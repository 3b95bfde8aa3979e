//! Name value object.

use super::errors::ValidationError;
use super::{string_field_impls, FieldKind, ValidatedField};

/// A contact's name.
///
/// Any text is accepted, the empty string included. The type still goes
/// through [`ValidatedField`] so that every field on a record is built the
/// same way.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Name, ValidatedField};
///
/// let name = Name::new("john doe").unwrap();
/// assert_eq!(name.as_str(), "john doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::validate(name).map(Self)
    }

    /// Replace the stored name.
    pub fn set(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = Self::validate(name)?;
        Ok(())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValidatedField for Name {
    const KIND: FieldKind = FieldKind::Name;

    fn is_valid(_candidate: &str) -> bool {
        true
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Name);
