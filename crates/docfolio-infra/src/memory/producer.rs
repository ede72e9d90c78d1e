use docfolio_core::repository::ProducerRepository;
use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;
use docfolio_types::producer::{NewProducerInfo, ProducerInfo};

use super::MemoryStore;

impl ProducerRepository for MemoryStore {
    async fn get_producer_info(&self) -> Result<Option<ProducerInfo>, RepositoryError> {
        Ok(self.producer.read().await.clone())
    }

    async fn update_producer_info(
        &self,
        new: NewProducerInfo,
    ) -> Result<ProducerInfo, RepositoryError> {
        let mut slot = self.producer.write().await;
        let id = slot
            .as_ref()
            .map(|current| current.id.clone())
            .unwrap_or_else(RecordId::generate);
        let info = ProducerInfo::from_insert(id, new);
        *slot = Some(info.clone());
        tracing::debug!(id = %info.id, "producer info replaced");
        Ok(info)
    }
}
