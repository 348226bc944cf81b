//! Login form rules.

use super::{FieldErrors, ValidationError, input_len};
use crate::models::{LoginField, LoginForm};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length accepted by the login form.
pub const LOGIN_PASSWORD_MIN_LEN: usize = 6;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Whether `email` has a `local@domain.tld` shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validates the login form.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must look like `local@domain.tld`
/// - Password must not be empty
/// - Password must be at least [`LOGIN_PASSWORD_MIN_LEN`] UTF-16 code units long
#[must_use]
pub fn validate_login(form: &LoginForm) -> FieldErrors<LoginField> {
    let mut errors = FieldErrors::new();

    if form.email.is_empty() {
        errors.insert(LoginField::Email, ValidationError::Required);
    } else if !is_valid_email(&form.email) {
        errors.insert(LoginField::Email, ValidationError::InvalidEmail);
    }

    if form.password.is_empty() {
        errors.insert(LoginField::Password, ValidationError::Required);
    } else if input_len(&form.password) < LOGIN_PASSWORD_MIN_LEN {
        errors.insert(
            LoginField::Password,
            ValidationError::PasswordTooShort {
                min: LOGIN_PASSWORD_MIN_LEN,
            },
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            remember_me: false,
        }
    }

    #[test]
    fn test_validate_login_valid() {
        assert!(validate_login(&login("a@b.com", "123456")).is_valid());
        assert!(validate_login(&login("student@stu.cu.edu.ng", "hunter22")).is_valid());
    }

    #[test]
    fn test_validate_login_bad_email() {
        let errors = validate_login(&login("bad", "123456"));
        assert!(!errors.is_valid());
        assert_eq!(
            errors.get(LoginField::Email),
            Some(&ValidationError::InvalidEmail)
        );
        assert!(!errors.has(LoginField::Password));
    }

    #[test]
    fn test_validate_login_short_password() {
        let errors = validate_login(&login("a@b.com", "12345"));
        assert!(!errors.is_valid());
        assert_eq!(
            errors.get(LoginField::Password),
            Some(&ValidationError::PasswordTooShort { min: 6 })
        );
        assert!(!errors.has(LoginField::Email));
    }

    #[test]
    fn test_validate_login_empty_fields_are_required() {
        let errors = validate_login(&LoginForm::default());
        assert_eq!(errors.get(LoginField::Email), Some(&ValidationError::Required));
        assert_eq!(
            errors.get(LoginField::Password),
            Some(&ValidationError::Required)
        );
    }

    #[test_case("a@b.com", true ; "minimal")]
    #[test_case("first.last+tag@mail.example.org", true ; "subdomain and tag")]
    #[test_case("a@b", false ; "missing tld")]
    #[test_case("a b@c.com", false ; "whitespace in local part")]
    #[test_case("a@@b.com", false ; "double at")]
    #[test_case("@b.com", false ; "missing local part")]
    #[test_case("a@.com", false ; "empty domain label")]
    fn test_email_shape(email: &str, expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn test_password_length_counts_accented_letters_once() {
        assert!(validate_login(&login("a@b.com", "pässwö")).is_valid());
    }

    #[test]
    fn test_password_length_counts_emoji_as_two_units() {
        assert!(validate_login(&login("a@b.com", "😀😀😀")).is_valid());
        assert_eq!(
            validate_login(&login("a@b.com", "😀😀")).get(LoginField::Password),
            Some(&ValidationError::PasswordTooShort { min: 6 })
        );
    }
}
