//! Documentary repository trait definition.

use docfolio_types::documentary::{Documentary, NewDocumentary};
use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;

/// Repository trait for documentaries.
///
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait DocumentaryRepository: Send + Sync {
    /// All documentaries in insertion order.
    fn list_documentaries(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Documentary>, RepositoryError>> + Send;

    /// Exact-match lookup by id.
    fn get_documentary(
        &self,
        id: &RecordId,
    ) -> impl std::future::Future<Output = Result<Option<Documentary>, RepositoryError>> + Send;

    /// Documentaries whose category equals `category` exactly, in insertion
    /// order. Empty when none match.
    fn list_documentaries_by_category(
        &self,
        category: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Documentary>, RepositoryError>> + Send;

    /// First documentary, in insertion order, with status "featured".
    fn get_featured_documentary(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<Documentary>, RepositoryError>> + Send;

    /// Assign a fresh id, append, and return the stored record.
    fn create_documentary(
        &self,
        new: NewDocumentary,
    ) -> impl std::future::Future<Output = Result<Documentary, RepositoryError>> + Send;
}
