//! User repository trait definition.

use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;
use docfolio_types::user::{NewUser, User};

/// Repository trait for users.
pub trait UserRepository: Send + Sync {
    fn get_user(
        &self,
        id: &RecordId,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Exact-match lookup; the first inserted user wins if names repeat.
    fn get_user_by_username(
        &self,
        username: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Assign a fresh id, append, and return the stored record.
    /// Username uniqueness is not checked.
    fn create_user(
        &self,
        new: NewUser,
    ) -> impl std::future::Future<Output = Result<User, RepositoryError>> + Send;
}
