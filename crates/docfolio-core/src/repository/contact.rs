//! Contact repository trait definition.

use docfolio_types::contact::{Contact, NewContact};
use docfolio_types::error::RepositoryError;

/// Repository trait for contact submissions. Append-only.
pub trait ContactRepository: Send + Sync {
    /// All submissions in insertion order (administrative use).
    fn list_contacts(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Contact>, RepositoryError>> + Send;

    /// Assign a fresh id and the current time, append, and return the
    /// stored record. The payload is not re-validated here.
    fn create_contact(
        &self,
        new: NewContact,
    ) -> impl std::future::Future<Output = Result<Contact, RepositoryError>> + Send;
}
