//! Contact form rules.

use super::{FieldErrors, ValidationError};
use crate::models::{ContactField, ContactForm};
use strum::IntoEnumIterator;

/// Validates the contact form.
///
/// # Validation rules
/// - Name, phone, email and message must not be empty
///
/// Presence only: whitespace counts as content and no format is checked.
#[must_use]
pub fn validate_contact(form: &ContactForm) -> FieldErrors<ContactField> {
    let mut errors = FieldErrors::new();
    for field in ContactField::iter() {
        if form.value(field).is_empty() {
            errors.insert(field, ValidationError::Required);
        }
    }
    errors
}
