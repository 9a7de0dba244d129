//! Contact draft: the transient name + message pair behind the contact form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;
use std::str::FromStr;

/// Notice shown when a required field is blank.
pub const VALIDATION_NOTICE: &str = "Por favor llena tu nombre y un mensaje.";

/// Error returned by [`ContactDraft::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field is empty after trimming. Carries the first such field.
    #[error("{}", VALIDATION_NOTICE)]
    EmptyField(ContactField),
}

impl ValidationError {
    /// The field that failed validation.
    #[must_use]
    pub fn field(self) -> ContactField {
        match self {
            Self::EmptyField(field) => field,
        }
    }
}

/// Editable fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Message,
}

impl ContactField {
    /// Form input `name` attribute for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown form field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown contact field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "message" => Ok(Self::Message),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// In-memory contact form state. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub message: String,
}

impl ContactDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Replace one field, leaving the other untouched. No validation happens here.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        match field {
            ContactField::Name => self.name = value.into(),
            ContactField::Message => self.message = value.into(),
        }
    }

    /// Current value of a field.
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Message => &self.message,
        }
    }

    /// Check that both fields are non-empty after trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::EmptyField(ContactField::Name));
        }
        if is_blank(&self.message) {
            return Err(ValidationError::EmptyField(ContactField::Message));
        }
        Ok(())
    }
}

/// True when `value` holds nothing but browser-trimmable whitespace.
///
/// Matches `String.prototype.trim` in the browser, which differs from
/// [`str::trim`]: U+FEFF counts as whitespace and U+0085 does not.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

fn is_form_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        other => other.is_whitespace(),
    }
}
