use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored record.
///
/// Generated ids are random UUID v4 strings. Seeded records may carry any
/// non-empty string (the bundled seed uses "1", "2", ...), so callers must
/// not assume a format or an ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Generate a fresh random identifier (128-bit, UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct_and_non_empty() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn test_record_id_serializes_as_plain_string() {
        let id = RecordId::from("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
        let parsed: RecordId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(parsed, id);
    }
}
