use docfolio_core::repository::DocumentaryRepository;
use docfolio_types::documentary::{Documentary, NewDocumentary};
use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;

use super::MemoryStore;

impl DocumentaryRepository for MemoryStore {
    async fn list_documentaries(&self) -> Result<Vec<Documentary>, RepositoryError> {
        Ok(self.documentaries.read().await.clone())
    }

    async fn get_documentary(&self, id: &RecordId) -> Result<Option<Documentary>, RepositoryError> {
        let docs = self.documentaries.read().await;
        Ok(docs.iter().find(|d| d.id == *id).cloned())
    }

    async fn list_documentaries_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Documentary>, RepositoryError> {
        let docs = self.documentaries.read().await;
        Ok(docs
            .iter()
            .filter(|d| d.category.as_str() == category)
            .cloned()
            .collect())
    }

    async fn get_featured_documentary(&self) -> Result<Option<Documentary>, RepositoryError> {
        let docs = self.documentaries.read().await;
        Ok(docs.iter().find(|d| d.is_featured()).cloned())
    }

    async fn create_documentary(
        &self,
        new: NewDocumentary,
    ) -> Result<Documentary, RepositoryError> {
        let documentary = Documentary::from_insert(RecordId::generate(), new);
        self.documentaries.write().await.push(documentary.clone());
        tracing::debug!(id = %documentary.id, title = %documentary.title, "documentary created");
        Ok(documentary)
    }
}
