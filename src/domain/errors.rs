//! Domain validation errors.

use std::fmt;

/// The kind of field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Phone,
    Birthday,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Phone => write!(f, "phone"),
            Self::Birthday => write!(f, "birthday"),
        }
    }
}

/// A value was rejected by a field validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Which field rejected the value.
    pub field: FieldKind,

    /// The offending value, as given.
    pub value: String,
}

impl ValidationError {
    pub fn new(field: FieldKind, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            FieldKind::Phone => write!(
                f,
                "Invalid phone number format for '{}'. It should be a 10-digit number.",
                self.value
            ),
            FieldKind::Birthday => write!(
                f,
                "Invalid value for birthday: '{}'. Expected a date as YYYY-MM-DD.",
                self.value
            ),
            FieldKind::Name => write!(f, "Invalid value for name: '{}'", self.value),
        }
    }
}

impl std::error::Error for ValidationError {}
