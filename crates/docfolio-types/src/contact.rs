use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::RecordId;
use crate::validation::{FieldViolation, ValidationErrors, char_len, is_present, is_valid_email};

/// Minimum message length, in characters.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Submission fields in reporting order.
const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

/// A submitted inquiry from the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Assigned by the store at creation.
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn from_insert(id: RecordId, created_at: DateTime<Utc>, new: NewContact) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            subject: new.subject,
            message: new.message,
            created_at,
        }
    }
}

/// Contact-form submission. `id` and `createdAt` are never client-supplied.
///
/// Missing fields deserialize as empty strings so that they surface as
/// field violations from [`NewContact::validate`] rather than as a parse
/// failure of the whole body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Check every rule and report all violations at once, in field order.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if !is_present(&self.name) {
            errors.push("name", "Name is required");
        }
        if !is_valid_email(&self.email) {
            errors.push("email", "Please enter a valid email address");
        }
        if !is_present(&self.subject) {
            errors.push("subject", "Subject is required");
        }
        if char_len(&self.message) < MIN_MESSAGE_LEN {
            errors.push("message", "Message must be at least 10 characters long");
        }

        errors.into_result()
    }

    /// Read a submission out of a decoded JSON body and validate it.
    ///
    /// A field that is present but not a string (including `null`) is a
    /// violation of its own; missing fields count as empty.
    pub fn from_value(body: &Value) -> Result<Self, ValidationErrors> {
        let mut mistyped = ValidationErrors::default();
        let mut text = |field: &str| match body.get(field) {
            None => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                mistyped.push(field, "Expected a string");
                String::new()
            }
        };
        let new = Self {
            name: text("name"),
            email: text("email"),
            subject: text("subject"),
            message: text("message"),
        };

        let rules = new.validate().err().unwrap_or_default();
        if mistyped.is_empty() {
            return if rules.is_empty() { Ok(new) } else { Err(rules) };
        }

        let mut violations: Vec<FieldViolation> = mistyped
            .iter()
            .cloned()
            .chain(rules.iter().filter(|v| !mistyped.has_field(&v.field)).cloned())
            .collect();
        violations.sort_by_key(|v| FIELDS.iter().position(|f| *f == v.field));
        Err(ValidationErrors(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewContact {
        NewContact::new("Ada", "a@b.com", "Collaboration", "Tell me more")
    }

    #[test]
    fn test_valid_contact_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_message_length_boundary() {
        let mut c = valid();
        c.message = "123456789".to_string();
        let errors = c.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("message"));

        c.message = "1234567890".to_string();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_email_syntax() {
        let mut c = valid();
        c.email = "not-an-email".to_string();
        let errors = c.validate().unwrap_err();
        assert!(errors.has_field("email"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_padded_email_rejected() {
        let mut c = valid();
        c.email = "  a@b.com \n".to_string();
        let errors = c.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("email"));
    }

    #[test]
    fn test_from_value_accepts_valid_body() {
        let body = serde_json::json!({
            "name": "Ada",
            "email": "a@b.com",
            "subject": "Collaboration",
            "message": "Tell me more",
        });
        assert_eq!(NewContact::from_value(&body).unwrap(), valid());
    }

    #[test]
    fn test_from_value_reports_mistyped_fields_with_rule_violations() {
        let body = serde_json::json!({
            "name": null,
            "email": 12345,
            "subject": "Hi",
            "message": "short",
        });
        let errors = NewContact::from_value(&body).unwrap_err();
        let reported: Vec<(&str, &str)> = errors
            .iter()
            .map(|v| (v.field.as_str(), v.message.as_str()))
            .collect();
        assert_eq!(
            reported,
            vec![
                ("name", "Expected a string"),
                ("email", "Expected a string"),
                ("message", "Message must be at least 10 characters long"),
            ]
        );
    }

    #[test]
    fn test_from_value_non_object_is_all_missing() {
        let errors = NewContact::from_value(&serde_json::json!([1, 2])).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_blank_fields_report_every_violation_in_order() {
        let c = NewContact::new("  ", "", "", "short");
        let errors = c.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "subject", "message"]);
    }

    #[test]
    fn test_missing_fields_deserialize_as_empty() {
        let c: NewContact = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(c.name, "Ada");
        assert!(c.email.is_empty());
        assert_eq!(c.validate().unwrap_err().len(), 3);
    }

    #[test]
    fn test_contact_serializes_created_at_camel_case() {
        let contact = Contact::from_insert(RecordId::from("c1"), Utc::now(), valid());
        let value = serde_json::to_value(&contact).unwrap();
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["subject"], "Collaboration");
    }
}
