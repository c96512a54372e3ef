use std::fmt;

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

/// A contact message as submitted to the form relay.
///
/// The same type doubles as the in-progress draft: all fields are free-form
/// strings and completeness checks are the caller's concern. The serde field
/// names are the wire keys of the relay payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Overwrites a single field. Any string is accepted.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Resets all fields to empty strings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field contains something other than whitespace.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The fields that are empty after trimming, in declaration order.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|&field| self.field(field).trim().is_empty())
            .collect()
    }

    /// Whether the email field parses as an RFC-shaped address.
    pub fn email_is_well_formed(&self) -> bool {
        EmailAddress::is_valid(self.email.trim())
    }
}

/// The four fields of a [`ContactMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The JSON key of this field in the relay payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
