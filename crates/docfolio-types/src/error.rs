use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors from repository operations (used by trait definitions in docfolio-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid seed data: {0}")]
    InvalidSeed(String),
}

/// Outcome classes of a request-layer operation.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// The requested entity or singleton does not exist. Expected, not retried.
    #[error("{0}")]
    NotFound(String),

    /// The write payload broke one or more field rules. Nothing was stored.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Unexpected store failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for PortfolioError {
    fn from(e: RepositoryError) -> Self {
        PortfolioError::Internal(e.to_string())
    }
}

/// Errors raised by presentation-side data sources.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to fetch {resource}: {reason}")]
    Fetch { resource: String, reason: String },

    #[error("invalid {resource} document: {reason}")]
    Decode { resource: String, reason: String },
}

impl SourceError {
    pub fn fetch(resource: &str, reason: impl ToString) -> Self {
        SourceError::Fetch {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(resource: &str, reason: impl ToString) -> Self {
        SourceError::Decode {
            resource: resource.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Unavailable("lock poisoned".to_string());
        assert_eq!(err.to_string(), "storage unavailable: lock poisoned");
    }

    #[test]
    fn test_repository_error_becomes_internal() {
        let err: PortfolioError = RepositoryError::Unavailable("down".to_string()).into();
        assert!(matches!(err, PortfolioError::Internal(_)));
    }

    #[test]
    fn test_not_found_message_is_passed_through() {
        let err = PortfolioError::NotFound("Documentary not found".to_string());
        assert_eq!(err.to_string(), "Documentary not found");
    }

    #[test]
    fn test_source_error_display() {
        let err = SourceError::decode("documentaries", "expected an array");
        assert_eq!(
            err.to_string(),
            "invalid documentaries document: expected an array"
        );
        assert!(SourceError::NotFound("producer".to_string()).is_not_found());
    }
}
