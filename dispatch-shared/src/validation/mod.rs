//! Validation logic for the contact, login and signup forms.
//!
//! Each validator is a pure function from a form to a [`FieldErrors`] set.
//! The set is recomputed wholesale on every submission attempt and entries
//! are cleared individually while the user edits the matching input.

mod contact;
mod login;
mod signup;
mod strength;

pub use contact::validate_contact;
pub use login::{LOGIN_PASSWORD_MIN_LEN, is_valid_email, validate_login};
pub use signup::{
    DEFAULT_INSTITUTION_DOMAIN, SIGNUP_PASSWORD_MIN_LEN, is_institutional_email, validate_signup,
};
pub use strength::{PasswordStrength, StrengthLabel};

use std::collections::{BTreeMap, btree_map};
use thiserror::Error;

/// Validation errors that can occur during form validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is required but empty
    #[error("This field is required")]
    Required,
    /// Email address does not have a `local@domain.tld` shape
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Email address is not on the institutional student domain
    #[error("Please use your student email (@{domain})")]
    InstitutionalEmailRequired {
        /// Required domain, without the leading `@`
        domain: String,
    },
    /// Password is shorter than the form's minimum
    #[error("Password must be at least {min} characters long")]
    PasswordTooShort {
        /// Minimum length in UTF-16 code units
        min: usize,
    },
    /// Terms and conditions checkbox left unticked
    #[error("You must accept the Terms and Conditions")]
    TermsNotAccepted,
}

impl ValidationError {
    /// Stable identifier used to look up a localized message.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::InvalidEmail => "invalid",
            Self::InstitutionalEmailRequired { .. } => "domain",
            Self::PasswordTooShort { .. } => "too_short",
            Self::TermsNotAccepted => "not_accepted",
        }
    }
}

/// Per-form mapping from field to its validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for `field`, replacing any earlier entry.
    pub fn insert(&mut self, field: F, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// The failure recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Whether `field` currently has a failure.
    #[must_use]
    pub fn has(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    /// Removes the entry for `field`. Returns `true` if one was present.
    pub fn clear(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// `true` when no field failed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Same as [`FieldErrors::is_valid`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    /// Failing fields with their errors, in declaration order.
    pub fn iter(&self) -> Iter<'_, F> {
        self.into_iter()
    }
}

/// Iterator over the entries of a [`FieldErrors`] set.
pub type Iter<'a, F> = std::iter::Map<
    btree_map::Iter<'a, F, ValidationError>,
    fn((&'a F, &'a ValidationError)) -> (F, &'a ValidationError),
>;

impl<'a, F: Ord + Copy> IntoIterator for &'a FieldErrors<F> {
    type Item = (F, &'a ValidationError);
    type IntoIter = Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

/// Length in UTF-16 code units, matching what a browser input reports as
/// its `value.length`. Characters outside the Basic Multilingual Plane,
/// such as most emoji, count as two.
pub(crate) fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginField;

    #[test]
    fn test_field_errors_insert_and_clear() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_valid());

        errors.insert(LoginField::Password, ValidationError::Required);
        errors.insert(LoginField::Email, ValidationError::InvalidEmail);
        assert!(!errors.is_valid());
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![LoginField::Email, LoginField::Password]
        );

        assert!(errors.clear(LoginField::Email));
        assert!(!errors.clear(LoginField::Email));
        assert!(!errors.has(LoginField::Email));
        assert_eq!(
            errors.get(LoginField::Password),
            Some(&ValidationError::Required)
        );
    }

    #[test]
    fn test_input_len_counts_utf16_units() {
        assert_eq!(input_len("abc"), 3);
        assert_eq!(input_len("ñandú"), 5);
        assert_eq!(input_len("😀😀😀"), 6);
    }

    #[test]
    fn test_iteration_by_reference() {
        let mut errors = FieldErrors::new();
        errors.insert(LoginField::Email, ValidationError::Required);
        let entries: Vec<_> = (&errors).into_iter().collect();
        assert_eq!(entries, vec![(LoginField::Email, &ValidationError::Required)]);
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            ValidationError::Required.code(),
            ValidationError::InvalidEmail.code(),
            ValidationError::InstitutionalEmailRequired {
                domain: DEFAULT_INSTITUTION_DOMAIN.to_string(),
            }
            .code(),
            ValidationError::PasswordTooShort { min: 6 }.code(),
            ValidationError::TermsNotAccepted.code(),
        ];
        let unique: std::collections::BTreeSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_error_messages_carry_parameters() {
        assert_eq!(
            ValidationError::PasswordTooShort { min: 8 }.to_string(),
            "Password must be at least 8 characters long"
        );
        assert_eq!(
            ValidationError::InstitutionalEmailRequired {
                domain: "stu.cu.edu.ng".to_string()
            }
            .to_string(),
            "Please use your student email (@stu.cu.edu.ng)"
        );
    }
}
