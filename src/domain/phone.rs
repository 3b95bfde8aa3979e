//! Phone value object.

use super::errors::ValidationError;
use super::{string_field_impls, FieldKind, ValidatedField};
use once_cell::sync::Lazy;
use regex::Regex;

/// One or more decimal digits from any script.
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid digits regex"));

/// A type-safe wrapper for phone numbers.
///
/// This ensures that phone numbers are validated at construction time.
/// The stored string is kept exactly as given; no formatting is stripped.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Phone, ValidatedField};
///
/// let phone = Phone::new("5551234567").unwrap();
/// assert_eq!(phone.as_str(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Validation Rules
    ///
    /// A value is accepted when either holds:
    /// - it is exactly 10 characters long (any characters)
    /// - it is non-empty and made only of decimal digits, in any script (any length)
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for [`FieldKind::Phone`] otherwise.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        Self::validate(phone).map(Self)
    }

    /// Replace the stored number, leaving it untouched on failure.
    pub fn set(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.0 = Self::validate(phone)?;
        Ok(())
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValidatedField for Phone {
    const KIND: FieldKind = FieldKind::Phone;

    fn is_valid(phone: &str) -> bool {
        phone.chars().count() == 10 || DIGITS.is_match(phone)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

string_field_impls!(Phone);
