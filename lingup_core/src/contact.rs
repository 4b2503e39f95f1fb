//! Contact form state.

use crate::api::ContactRequest;

/// Longest phone number the form accepts, e.g. `+998 90 123 45`.
pub const PHONE_MAX_LEN: usize = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    PhoneNumber,
    Description,
}

/// Why an edit was refused. The previous value is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    PhoneTooLong,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub phone_number: String,
    pub description: String,
}

impl ContactForm {
    /// Apply an input event. Phone input longer than [`PHONE_MAX_LEN`]
    /// characters is rejected.
    pub fn set(&mut self, field: ContactField, value: String) -> Result<(), FieldError> {
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::PhoneNumber => {
                if value.chars().count() > PHONE_MAX_LEN {
                    return Err(FieldError::PhoneTooLong);
                }
                self.phone_number = value;
            }
            ContactField::Description => self.description = value,
        }
        Ok(())
    }

    /// Apply the outcome of a send. Success empties the form at once and
    /// returns `true`; a failure keeps every field for another attempt.
    pub fn settle<E>(&mut self, result: &Result<(), E>) -> bool {
        if result.is_ok() {
            *self = Self::default();
        }
        result.is_ok()
    }

    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            full_name: self.full_name.clone(),
            phone_number: self.phone_number.clone(),
            description: self.description.clone(),
        }
    }
}
