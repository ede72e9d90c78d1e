//! Portfolio request-layer service.
//!
//! Maps the site's read operations and the contact write onto a
//! [`PortfolioStore`], turning store misses into `NotFound`, store failures
//! into `Internal`, and rejecting invalid contact payloads before the store
//! is touched.

use docfolio_types::contact::{Contact, NewContact};
use docfolio_types::documentary::Documentary;
use docfolio_types::error::PortfolioError;
use docfolio_types::id::RecordId;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;

use crate::repository::PortfolioStore;

/// Service exposing the portfolio operations over any store.
///
/// Holds no state of its own; the store is the sole owner of all records.
pub struct PortfolioService<S: PortfolioStore> {
    store: S,
}

impl<S: PortfolioStore> PortfolioService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store, for administrative access.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All documentaries in insertion order.
    pub async fn list_documentaries(&self) -> Result<Vec<Documentary>, PortfolioError> {
        Ok(self.store.list_documentaries().await?)
    }

    /// Documentaries in `category` (exact match). Empty is not an error.
    pub async fn list_documentaries_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Documentary>, PortfolioError> {
        Ok(self.store.list_documentaries_by_category(category).await?)
    }

    pub async fn get_documentary(&self, id: &RecordId) -> Result<Documentary, PortfolioError> {
        self.store
            .get_documentary(id)
            .await?
            .ok_or_else(|| not_found("Documentary not found"))
    }

    pub async fn get_featured_documentary(&self) -> Result<Documentary, PortfolioError> {
        self.store
            .get_featured_documentary()
            .await?
            .ok_or_else(|| not_found("No featured documentary found"))
    }

    pub async fn list_testimonials(&self) -> Result<Vec<Testimonial>, PortfolioError> {
        Ok(self.store.list_testimonials().await?)
    }

    pub async fn get_producer_info(&self) -> Result<ProducerInfo, PortfolioError> {
        self.store
            .get_producer_info()
            .await?
            .ok_or_else(|| not_found("Producer info not found"))
    }

    /// Validate and store a contact-form submission.
    ///
    /// On a validation failure every violated field is reported and the
    /// store is left untouched.
    pub async fn submit_contact(&self, new: NewContact) -> Result<Contact, PortfolioError> {
        if let Err(errors) = new.validate() {
            tracing::info!(violations = errors.len(), "contact submission rejected: {errors}");
            return Err(PortfolioError::Validation(errors));
        }

        let contact = self.store.create_contact(new).await?;
        tracing::info!(id = %contact.id, subject = %contact.subject, "contact submission stored");
        Ok(contact)
    }
}

fn not_found(message: &str) -> PortfolioError {
    tracing::debug!("{message}");
    PortfolioError::NotFound(message.to_string())
}
