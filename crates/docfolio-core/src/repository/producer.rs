//! Producer singleton repository trait definition.

use docfolio_types::error::RepositoryError;
use docfolio_types::producer::{NewProducerInfo, ProducerInfo};

/// Repository trait for the producer singleton.
pub trait ProducerRepository: Send + Sync {
    /// The singleton, or `None` if it was never seeded.
    fn get_producer_info(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<ProducerInfo>, RepositoryError>> + Send;

    /// Replace the whole record. Keeps the existing id when a singleton
    /// exists, otherwise generates one. Returns the new current value.
    fn update_producer_info(
        &self,
        new: NewProducerInfo,
    ) -> impl std::future::Future<Output = Result<ProducerInfo, RepositoryError>> + Send;
}
