//! Field sets backing the contact, login and signup forms.
//!
//! Every form addresses its inputs through a field enum whose `snake_case`
//! name matches the HTML `name` attribute and the translation keys.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Inputs of the contact form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ContactField {
    /// Full name.
    Name,
    /// Phone number.
    Phone,
    /// Reply address.
    Email,
    /// Ticket body.
    Message,
}

/// Contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Full name.
    pub name: String,
    /// Phone number, free text.
    pub phone: String,
    /// Reply address, free text.
    pub email: String,
    /// Ticket body.
    pub message: String,
}

impl ContactForm {
    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces the text of `field`.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Inputs of the login form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum LoginField {
    /// Account email.
    Email,
    /// Account password.
    Password,
}

/// Login form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
    /// Keep the session and the email across restarts.
    pub remember_me: bool,
}

impl LoginForm {
    /// Form pre-filled from a remembered email; remember-me starts checked
    /// when one exists.
    #[must_use]
    pub fn remembered(email: Option<String>) -> Self {
        email.map_or_else(Self::default, |email| Self {
            email,
            remember_me: true,
            ..Self::default()
        })
    }

    /// Current text of `field`.
    #[must_use]
    pub fn value(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Replaces the text of `field`.
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

/// Inputs of the signup form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum SignupField {
    /// Full name.
    Name,
    /// Institutional email.
    Email,
    /// New password.
    Password,
    /// Terms and conditions checkbox.
    Terms,
}

/// Signup form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupForm {
    /// Full name.
    pub name: String,
    /// Institutional email.
    pub email: String,
    /// New password.
    pub password: String,
    /// Whether the terms checkbox is ticked.
    pub terms_accepted: bool,
}

impl SignupForm {
    /// Text value of `field`; the terms checkbox has no text and reads as empty.
    #[must_use]
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
            SignupField::Terms => "",
        }
    }

    /// Updates a text field. The terms checkbox goes through
    /// [`SignupForm::terms_accepted`] and is left untouched here.
    pub fn set(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Name => self.name = value,
            SignupField::Email => self.email = value,
            SignupField::Password => self.password = value,
            SignupField::Terms => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_contact_set_and_value_address_the_same_field() {
        let mut form = ContactForm::default();
        for field in ContactField::iter() {
            form.set(field, format!("{field}-value"));
        }
        assert_eq!(form.name, "name-value");
        assert_eq!(form.value(ContactField::Message), "message-value");
    }

    #[test]
    fn test_field_names_match_input_names() {
        assert_eq!(ContactField::Phone.as_ref(), "phone");
        assert_eq!(LoginField::Password.as_ref(), "password");
        assert_eq!(SignupField::Terms.to_string(), "terms");
        assert_eq!("email".parse::<SignupField>(), Ok(SignupField::Email));
    }

    #[test]
    fn test_signup_terms_not_set_through_text_setter() {
        let mut form = SignupForm::default();
        form.set(SignupField::Terms, "on".to_string());
        assert!(!form.terms_accepted);
        assert_eq!(form.value(SignupField::Terms), "");
    }

    #[test]
    fn test_login_form_setter() {
        let mut form = LoginForm::default();
        form.set(LoginField::Email, "a@b.com".to_string());
        assert_eq!(form.value(LoginField::Email), "a@b.com");
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_login_form_remembered() {
        let form = LoginForm::remembered(Some("ada@stu.cu.edu.ng".to_string()));
        assert_eq!(form.email, "ada@stu.cu.edu.ng");
        assert!(form.remember_me);
        assert_eq!(LoginForm::remembered(None), LoginForm::default());
    }
}
