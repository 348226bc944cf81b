//! Localized validation messages.
//!
//! Keys follow `<form>.errors.<field>_<code>`; templates may carry `{min}`
//! and `{domain}` placeholders filled from the error itself.

use shared::validation::ValidationError;

/// Translation key for `error` on `field` of `form`.
pub fn error_key(form: &str, field: &str, error: &ValidationError) -> String {
    format!("{form}.errors.{field}_{}", error.code())
}

/// Substitutes the error's parameters into a translated template.
pub fn fill(template: &str, error: &ValidationError) -> String {
    match error {
        ValidationError::PasswordTooShort { min } => template.replace("{min}", &min.to_string()),
        ValidationError::InstitutionalEmailRequired { domain } => {
            template.replace("{domain}", domain)
        }
        _ => template.to_string(),
    }
}

/// Resolves the message with `translate`, falling back to the English
/// `Display` text when the key has no translation.
pub fn localize<T>(translate: T, form: &str, field: &str, error: &ValidationError) -> String
where
    T: Fn(&str) -> String,
{
    let key = error_key(form, field, error);
    let template = translate(&key);
    if template.is_empty() || template == key {
        error.to_string()
    } else {
        fill(&template, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{LoginForm, SignupForm};
    use shared::validation::{DEFAULT_INSTITUTION_DOMAIN, validate_login, validate_signup};

    fn lookup(key: &str) -> String {
        let table: serde_json::Value =
            serde_json::from_str(include_str!("../translations/en.json")).unwrap();
        key.split('.')
            .try_fold(&table, |node, part| node.get(part))
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| key.to_string(), str::to_string)
    }

    #[test]
    fn test_error_key() {
        assert_eq!(
            error_key("signup", "email", &ValidationError::InstitutionalEmailRequired {
                domain: "x".to_string()
            }),
            "signup.errors.email_domain"
        );
        assert_eq!(
            error_key("login", "password", &ValidationError::Required),
            "login.errors.password_required"
        );
    }

    #[test]
    fn test_fill_placeholders() {
        assert_eq!(
            fill("at least {min} chars", &ValidationError::PasswordTooShort { min: 8 }),
            "at least 8 chars"
        );
        assert_eq!(
            fill(
                "use @{domain}",
                &ValidationError::InstitutionalEmailRequired {
                    domain: "stu.cu.edu.ng".to_string()
                }
            ),
            "use @stu.cu.edu.ng"
        );
    }

    #[test]
    fn test_missing_translation_falls_back_to_display() {
        let message = localize(str::to_string, "login", "email", &ValidationError::InvalidEmail);
        assert_eq!(message, "Please enter a valid email address");
    }

    #[test]
    fn test_every_login_error_is_translated() {
        let forms = [
            LoginForm::default(),
            LoginForm {
                email: "bad".to_string(),
                password: "123".to_string(),
                remember_me: false,
            },
        ];
        for form in &forms {
            for (field, error) in validate_login(form).iter() {
                let key = error_key("login", field.as_ref(), error);
                assert_ne!(lookup(&key), key, "missing {key}");
            }
        }
        assert_eq!(
            localize(lookup, "login", "password", &ValidationError::PasswordTooShort { min: 6 }),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_every_signup_error_is_translated() {
        let forms = [
            SignupForm::default(),
            SignupForm {
                name: "Ada".to_string(),
                email: "ada@gmail.com".to_string(),
                password: "short".to_string(),
                terms_accepted: false,
            },
        ];
        for form in &forms {
            for (field, error) in validate_signup(form, DEFAULT_INSTITUTION_DOMAIN).iter() {
                let key = error_key("signup", field.as_ref(), error);
                assert_ne!(lookup(&key), key, "missing {key}");
            }
        }
        assert_eq!(
            localize(
                lookup,
                "signup",
                "email",
                &ValidationError::InstitutionalEmailRequired {
                    domain: DEFAULT_INSTITUTION_DOMAIN.to_string()
                }
            ),
            "Please use your student email (@stu.cu.edu.ng)."
        );
    }
}
