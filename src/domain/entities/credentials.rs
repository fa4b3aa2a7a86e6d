//! Credentials entity and its validation schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationErrors};

/// Message shown when the username field is left empty.
pub const USERNAME_REQUIRED: &str = "Username is required";

/// Message shown when the password is shorter than 8 characters.
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";

/// Username and password submitted through the login form.
///
/// Built from each submission and dropped once the submission settles.
/// Serializes to the `{"username", "password"}` body expected by the
/// authentication API.
#[derive(Clone, Default, Deserialize, Serialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from raw field values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Runs the schema and collects the first message for each failing field.
    ///
    /// # Errors
    ///
    /// Returns [`FieldErrors`] when at least one field violates its constraint.
    pub fn check(&self) -> Result<(), FieldErrors> {
        self.validate().map_err(|errors| FieldErrors::from(&errors))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Inline, per-field validation messages for the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            username: first_message(errors, "username"),
            password: first_message(errors, "password"),
        }
    }
}

fn first_message(errors: &ValidationErrors, field: &str) -> Option<String> {
    let field_errors = errors.field_errors();
    let error = field_errors.get(field)?.first()?;

    Some(
        error
            .message
            .as_ref()
            .map_or_else(|| error.code.to_string(), ToString::to_string),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let credentials = Credentials::new("hammad", "password1");

        assert!(credentials.check().is_ok());
    }

    #[test]
    fn test_empty_username_is_rejected() {
        let errors = Credentials::new("", "password1").check().unwrap_err();

        assert_eq!(errors.username.as_deref(), Some(USERNAME_REQUIRED));
        assert!(errors.password.is_none());
    }

    #[test]
    fn test_short_password_is_rejected() {
        let errors = Credentials::new("hammad", "short").check().unwrap_err();

        assert!(errors.username.is_none());
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_both_fields_reported_together() {
        let errors = Credentials::default().check().unwrap_err();

        assert_eq!(errors.username.as_deref(), Some(USERNAME_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_password_boundary() {
        assert!(Credentials::new("u", "1234567").check().is_err());
        assert!(Credentials::new("u", "12345678").check().is_ok());
    }

    #[test]
    fn test_password_length_counts_characters() {
        // 8 characters, 16 bytes
        assert!(Credentials::new("u", "ääääääää").check().is_ok());
    }

    #[test]
    fn test_whitespace_username_counts_as_present() {
        assert!(Credentials::new(" ", "password1").check().is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("hammad", "hunter2hunter2"));

        assert!(rendered.contains("hammad"));
        assert!(!rendered.contains("hunter2hunter2"));
    }

    #[test]
    fn test_serializes_to_login_body() {
        let body = serde_json::to_value(Credentials::new("hammad", "password1")).unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "username": "hammad", "password": "password1" })
        );
    }
}
