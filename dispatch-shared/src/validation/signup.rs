//! Signup form rules.

use super::{FieldErrors, ValidationError, input_len};
use crate::models::{SignupField, SignupForm};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length accepted by the signup form.
pub const SIGNUP_PASSWORD_MIN_LEN: usize = 8;

/// Student mail domain of Covenant University.
pub const DEFAULT_INSTITUTION_DOMAIN: &str = "stu.cu.edu.ng";

static LOCAL_PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+$").expect("local part pattern compiles"));

/// Whether `email` is `local@<domain>` with a plain local part.
///
/// The domain comparison is exact and case-sensitive.
#[must_use]
pub fn is_institutional_email(email: &str, domain: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, host)| host == domain && LOCAL_PART.is_match(local))
}

/// Validates the signup form against the institutional `domain`.
///
/// # Validation rules
/// - Name must not be empty or whitespace only
/// - Email must not be empty
/// - Email must be on the institutional student domain
/// - Password must not be empty
/// - Password must be at least [`SIGNUP_PASSWORD_MIN_LEN`] UTF-16 code units long
/// - Terms and conditions must be accepted
#[must_use]
pub fn validate_signup(form: &SignupForm, domain: &str) -> FieldErrors<SignupField> {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(SignupField::Name, ValidationError::Required);
    }

    if form.email.is_empty() {
        errors.insert(SignupField::Email, ValidationError::Required);
    } else if !is_institutional_email(&form.email, domain) {
        errors.insert(
            SignupField::Email,
            ValidationError::InstitutionalEmailRequired {
                domain: domain.to_string(),
            },
        );
    }

    if form.password.is_empty() {
        errors.insert(SignupField::Password, ValidationError::Required);
    } else if input_len(&form.password) < SIGNUP_PASSWORD_MIN_LEN {
        errors.insert(
            SignupField::Password,
            ValidationError::PasswordTooShort {
                min: SIGNUP_PASSWORD_MIN_LEN,
            },
        );
    }

    if !form.terms_accepted {
        errors.insert(SignupField::Terms, ValidationError::TermsNotAccepted);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn signup(email: &str, password: &str) -> SignupForm {
        SignupForm {
            name: "Ada Obi".to_string(),
            email: email.to_string(),
            password: password.to_string(),
            terms_accepted: true,
        }
    }

    #[test]
    fn test_validate_signup_valid() {
        let errors = validate_signup(
            &signup("a@stu.cu.edu.ng", "12345678"),
            DEFAULT_INSTITUTION_DOMAIN,
        );
        assert!(errors.is_valid());
    }

    #[test]
    fn test_validate_signup_wrong_domain() {
        let errors = validate_signup(
            &signup("a@gmail.com", "12345678"),
            DEFAULT_INSTITUTION_DOMAIN,
        );
        assert!(!errors.is_valid());
        assert_eq!(
            errors.get(SignupField::Email),
            Some(&ValidationError::InstitutionalEmailRequired {
                domain: DEFAULT_INSTITUTION_DOMAIN.to_string()
            })
        );
    }

    #[test]
    fn test_validate_signup_short_password() {
        let errors = validate_signup(
            &signup("a@stu.cu.edu.ng", "1234567"),
            DEFAULT_INSTITUTION_DOMAIN,
        );
        assert_eq!(
            errors.get(SignupField::Password),
            Some(&ValidationError::PasswordTooShort { min: 8 })
        );
    }

    #[test]
    fn test_validate_signup_emoji_password_length() {
        let errors = validate_signup(
            &signup("a@stu.cu.edu.ng", "😀😀😀😀"),
            DEFAULT_INSTITUTION_DOMAIN,
        );
        assert!(errors.is_valid());
    }

    #[test]
    fn test_validate_signup_terms_required() {
        let form = SignupForm {
            terms_accepted: false,
            ..signup("a@stu.cu.edu.ng", "12345678")
        };
        let errors = validate_signup(&form, DEFAULT_INSTITUTION_DOMAIN);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![SignupField::Terms]);
        assert_eq!(
            errors.get(SignupField::Terms),
            Some(&ValidationError::TermsNotAccepted)
        );
    }

    #[test]
    fn test_validate_signup_whitespace_name_is_required() {
        let form = SignupForm {
            name: "   ".to_string(),
            ..signup("a@stu.cu.edu.ng", "12345678")
        };
        let errors = validate_signup(&form, DEFAULT_INSTITUTION_DOMAIN);
        assert_eq!(errors.get(SignupField::Name), Some(&ValidationError::Required));
    }

    #[test]
    fn test_validate_signup_empty_form() {
        let errors = validate_signup(&SignupForm::default(), DEFAULT_INSTITUTION_DOMAIN);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(SignupField::Email), Some(&ValidationError::Required));
        assert_eq!(
            errors.get(SignupField::Password),
            Some(&ValidationError::Required)
        );
    }

    #[test]
    fn test_validate_signup_custom_domain() {
        let form = signup("a@students.example.edu", "12345678");
        let errors = validate_signup(&form, "students.example.edu");
        assert!(errors.is_valid());
    }

    #[test_case("jane.doe@stu.cu.edu.ng", true ; "dotted local part")]
    #[test_case("j_doe+1%x-y@stu.cu.edu.ng", true ; "allowed symbols")]
    #[test_case("jane@STU.CU.EDU.NG", false ; "domain is case sensitive")]
    #[test_case("jane@cu.edu.ng", false ; "staff domain")]
    #[test_case("jane@stu.cu.edu.ng.evil.com", false ; "domain suffix attack")]
    #[test_case("ja ne@stu.cu.edu.ng", false ; "space in local part")]
    #[test_case("@stu.cu.edu.ng", false ; "empty local part")]
    #[test_case("a@b@stu.cu.edu.ng", false ; "second at sign")]
    fn test_institutional_email(email: &str, expected: bool) {
        assert_eq!(
            is_institutional_email(email, DEFAULT_INSTITUTION_DOMAIN),
            expected
        );
    }
}
