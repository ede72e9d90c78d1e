use docfolio_core::repository::TestimonialRepository;
use docfolio_types::error::RepositoryError;
use docfolio_types::id::RecordId;
use docfolio_types::testimonial::{NewTestimonial, Testimonial};

use super::MemoryStore;

impl TestimonialRepository for MemoryStore {
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, RepositoryError> {
        Ok(self.testimonials.read().await.clone())
    }

    async fn create_testimonial(
        &self,
        new: NewTestimonial,
    ) -> Result<Testimonial, RepositoryError> {
        let testimonial = Testimonial::from_insert(RecordId::generate(), new);
        self.testimonials.write().await.push(testimonial.clone());
        Ok(testimonial)
    }
}
