use chrono::Utc;
use docfolio_core::repository::ContactRepository;
use docfolio_types::contact::{Contact, NewContact};
use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;

use super::MemoryStore;

impl ContactRepository for MemoryStore {
    async fn list_contacts(&self) -> Result<Vec<Contact>, RepositoryError> {
        Ok(self.contacts.read().await.clone())
    }

    async fn create_contact(&self, new: NewContact) -> Result<Contact, RepositoryError> {
        let contact = Contact::from_insert(RecordId::generate(), Utc::now(), new);
        self.contacts.write().await.push(contact.clone());
        Ok(contact)
    }
}
