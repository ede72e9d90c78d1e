//! Testimonial repository trait definition.

use docfolio_types::error::RepositoryError;
use docfolio_types::testimonial::{NewTestimonial, Testimonial};

/// Repository trait for testimonials. Append-only.
pub trait TestimonialRepository: Send + Sync {
    /// All testimonials in insertion order.
    fn list_testimonials(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Testimonial>, RepositoryError>> + Send;

    /// Assign a fresh id, default a missing rating to "5", append, and
    /// return the stored record.
    fn create_testimonial(
        &self,
        new: NewTestimonial,
    ) -> impl std::future::Future<Output = Result<Testimonial, RepositoryError>> + Send;
}
