//! Contact form values.
//!
//! [`ContactDraft`] holds what the visitor is typing. [`ContactDraft::validate`]
//! turns it into a [`ContactSubmission`], the only shape the store accepts.

use serde::Serialize;
use thiserror::Error;

use crate::NonEmptyString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Field,
    Phone,
    Email,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Field, Self::Phone, Self::Email];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Field => "Field",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Full name",
            Self::Field => "Your industry or domain",
            Self::Phone => "Phone number",
            Self::Email => "you@example.com",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Field,
            Self::Field => Self::Phone,
            Self::Phone => Self::Email,
            Self::Email => Self::Name,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Field => Self::Name,
            Self::Phone => Self::Field,
            Self::Email => Self::Phone,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    #[error("{} is required", .0.label())]
    Missing(ContactField),
    #[error("email address looks incomplete")]
    InvalidEmail,
}

/// Free-text form state. Every field may be empty while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub field: String,
    pub phone: String,
    pub email: String,
}

impl ContactDraft {
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Field => &self.field,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
        }
    }

    pub fn value_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Field => &mut self.field,
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.value(*field).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check all four fields are present and the email is plausible.
    pub fn validate(&self) -> Result<ContactSubmission, ContactValidationError> {
        let required = |field: ContactField| {
            NonEmptyString::new(self.value(field))
                .map_err(|_| ContactValidationError::Missing(field))
        };

        let submission = ContactSubmission {
            name: required(ContactField::Name)?,
            field: required(ContactField::Field)?,
            phone: required(ContactField::Phone)?,
            email: required(ContactField::Email)?,
        };

        if !looks_like_email(submission.email.as_str()) {
            return Err(ContactValidationError::InvalidEmail);
        }
        Ok(submission)
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.chars().any(char::is_whitespace)
}

/// A validated contact request, serialized as the stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: NonEmptyString,
    field: NonEmptyString,
    phone: NonEmptyString,
    email: NonEmptyString,
}

impl ContactSubmission {
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
