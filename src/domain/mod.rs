//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the scalar fields of a
//! contact: names, phone numbers and birthdays. Each value object validates
//! at construction time, so an invalid value can never be stored on a
//! record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::{FieldKind, ValidationError};
pub use name::Name;
pub use phone::Phone;

/// A scalar value that is checked before it is stored.
///
/// Implementors supply the rule in [`ValidatedField::is_valid`]; the
/// provided [`ValidatedField::validate`] turns a rejected candidate into a
/// [`ValidationError`] tagged with the field kind.
pub trait ValidatedField: Sized {
    /// Which field this type stores.
    const KIND: FieldKind;

    /// Check a candidate value without storing it.
    fn is_valid(candidate: &str) -> bool;

    /// Borrow the stored value.
    fn as_str(&self) -> &str;

    /// Return the candidate unchanged if it passes validation.
    fn validate(candidate: impl Into<String>) -> Result<String, ValidationError> {
        let candidate = candidate.into();
        if !Self::is_valid(&candidate) {
            return Err(ValidationError::new(Self::KIND, candidate));
        }
        Ok(candidate)
    }
}

/// Serialize/Deserialize/Display for a validated string newtype.
///
/// Values serialize as plain strings and deserialize through `new`, so an
/// invalid value in a data file is a decode error.
macro_rules! string_field_impls {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<str> for $ty {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $ty {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

pub(crate) use string_field_impls;
