use docfolio_core::repository::UserRepository;
use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;
use docfolio_types::user::{NewUser, User};

use super::MemoryStore;

impl UserRepository for MemoryStore {
    async fn get_user(&self, id: &RecordId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, new: NewUser) -> Result<User, RepositoryError> {
        let user = User::from_insert(RecordId::generate(), new);
        self.users.write().await.push(user.clone());
        Ok(user)
    }
}
