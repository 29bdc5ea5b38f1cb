//! Login and contact form models.

use serde::{Deserialize, Serialize};

use crate::config::{
    CONTACT_NAME_MAX_LENGTH, LOGIN_SUCCESS_MESSAGE, MESSAGE_MIN_LENGTH, NAME_MIN_LENGTH,
    USERNAME_MAX_LENGTH,
};
use crate::validation::{Constraint, FieldRule, FieldValue, ValidateFields};

/// Login form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl ValidateFields for LoginForm {
    fn rules() -> &'static [FieldRule] {
        const RULES: &[FieldRule] = &[FieldRule::new(
            "username",
            Constraint::Length { min: None, max: Some(USERNAME_MAX_LENGTH) },
        )];
        RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "username" => FieldValue::Str(&self.username),
            "password" => FieldValue::Str(&self.password),
            _ => FieldValue::Absent,
        }
    }
}

/// Login response: the username and a fixed success message. The password
/// is deliberately not part of this type.
#[derive(Debug, Clone, Serialize)]
pub struct LoginOut {
    pub username: String,
    pub message: &'static str,
}

impl LoginOut {
    pub fn new(username: String) -> Self {
        Self { username, message: LOGIN_SUCCESS_MESSAGE }
    }
}

/// Contact form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ValidateFields for ContactForm {
    fn rules() -> &'static [FieldRule] {
        const NAME_BOUNDS: Constraint = Constraint::Length {
            min: Some(NAME_MIN_LENGTH),
            max: Some(CONTACT_NAME_MAX_LENGTH),
        };
        const RULES: &[FieldRule] = &[
            FieldRule::new("first_name", NAME_BOUNDS),
            FieldRule::new("last_name", NAME_BOUNDS),
            FieldRule::new("email", Constraint::Email),
            FieldRule::new(
                "message",
                Constraint::Length { min: Some(MESSAGE_MIN_LENGTH), max: None },
            ),
        ];
        RULES
    }

    fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "first_name" => FieldValue::Str(&self.first_name),
            "last_name" => FieldValue::Str(&self.last_name),
            "email" => FieldValue::Str(&self.email),
            "message" => FieldValue::Str(&self.message),
            _ => FieldValue::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_username_length() {
        let form = LoginForm {
            username: "a".repeat(21),
            password: "whatever".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "username");
    }

    #[test]
    fn test_login_out_carries_fixed_message() {
        let out = LoginOut::new("laura2026".to_string());
        assert_eq!(out.message, LOGIN_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_contact_message_minimum_length() {
        let form = ContactForm {
            first_name: "Laura".to_string(),
            last_name: "Gomez".to_string(),
            email: "laura@example.com".to_string(),
            message: "too short".to_string(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "message");
    }
}
