//! Contact message validation.
//!
//! The portfolio page validates its contact form field by field before
//! handing the message to the submit gateway. The rules live here as a
//! pure module so a renderer only has to relay the failing field's
//! message.

use crate::error::{FolioError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters (any script) and spaces, 2 to 50 characters.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\s]{2,50}$").unwrap());

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Validates all fields, reporting the first failing one.
    ///
    /// Values are trimmed before checking, matching how the form trims
    /// its inputs.
    ///
    /// # Errors
    ///
    /// Returns `FolioError::Validation` naming the failing field with
    /// a user-facing message.
    pub fn validate(&self) -> Result<()> {
        if !NAME_PATTERN.is_match(self.name.trim()) {
            return Err(FolioError::validation(
                "name",
                "Name must be 2-50 characters (letters only)",
            ));
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(FolioError::validation(
                "email",
                "Please enter a valid email address",
            ));
        }
        let message_len = self.message.trim().chars().count();
        if !(MESSAGE_MIN..=MESSAGE_MAX).contains(&message_len) {
            return Err(FolioError::validation(
                "message",
                "Message must be at least 10 characters",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Ann Example".to_string(),
            email: "ann@example.com".to_string(),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(valid_message().validate().is_ok());
    }

    #[test]
    fn test_name_rejects_digits_and_short_values() {
        let mut msg = valid_message();
        msg.name = "A".to_string();
        assert!(msg.validate().unwrap_err().is_validation());

        msg.name = "Ann 2".to_string();
        assert!(msg.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_name_accepts_non_latin_letters() {
        let mut msg = valid_message();
        msg.name = "Олена Коваль".to_string();
        assert!(msg.validate().is_ok());
    }

    #[test]
    fn test_email_shape() {
        let mut msg = valid_message();
        msg.email = "not-an-email".to_string();
        let err = msg.validate().unwrap_err();
        assert!(matches!(
            err,
            FolioError::Validation { field: "email", .. }
        ));
    }

    #[test]
    fn test_message_length_bounds() {
        let mut msg = valid_message();
        msg.message = "too short".to_string();
        assert!(msg.validate().is_err());

        msg.message = "x".repeat(1001);
        assert!(msg.validate().is_err());

        msg.message = "x".repeat(1000);
        assert!(msg.validate().is_ok());
    }
}
