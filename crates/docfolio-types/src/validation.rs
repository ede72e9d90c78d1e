//! Field-level validation primitives shared by insert payloads.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Maximum accepted length of an email address.
const MAX_EMAIL_LEN: usize = 254;

/// One rule violated by one field of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the offending field.
    pub field: String,
    /// Human-readable, actionable message.
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All violations found in a payload, in field order. Never empty when
/// returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldViolation>);

impl ValidationErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldViolation::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldViolation> {
        self.0.iter()
    }

    /// Whether any violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    /// `Ok(())` when nothing was collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Non-empty after trimming.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Length in characters (not bytes).
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Syntactic email check: a single `@`, a non-empty local part without
/// whitespace or dot runs, and a dotted domain of alphanumeric/hyphen
/// labels ending in an alphabetic TLD of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return false;
    }
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if domain.contains('@') {
        return false;
    }

    if local.is_empty() || local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    if !labels_ok {
        return false;
    }

    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "a@b.com",
            "pkera@documentaryproducer.com",
            "first.last+tag@mail.example.co.uk",
            "x_y@sub-domain.org",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "not-an-email",
            "@b.com",
            "a@",
            "a@b",
            "a@b.c",
            "a@@b.com",
            "a b@c.com",
            "a@b..com",
            ".a@b.com",
            "a..b@c.com",
            "a@-b.com",
            "a@b.c0m",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_email_length_cap() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long));
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_validation_errors_display_and_result() {
        let mut errors = ValidationErrors::default();
        assert!(errors.clone().into_result().is_ok());
        errors.push("name", "Name is required");
        errors.push("message", "too short");
        assert!(errors.has_field("message"));
        assert!(!errors.has_field("email"));
        assert_eq!(errors.to_string(), "name: Name is required; message: too short");
        assert_eq!(errors.into_result().unwrap_err().len(), 2);
    }
}
