//! Data-source port for the presentation layer.

use docfolio_types::documentary::Documentary;
use docfolio_types::error::SourceError;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;

/// Where the front end reads portfolio data from.
///
/// Implemented over the live JSON API and over the published static
/// documents; the gallery and home page work the same with either.
pub trait DataSource: Send + Sync {
    fn documentaries(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Documentary>, SourceError>> + Send;

    fn testimonials(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Testimonial>, SourceError>> + Send;

    /// `SourceError::NotFound` when no producer record exists.
    fn producer(&self) -> impl std::future::Future<Output = Result<ProducerInfo, SourceError>> + Send;

    /// `SourceError::NotFound` when there is nothing to feature.
    fn featured(&self) -> impl std::future::Future<Output = Result<Documentary, SourceError>> + Send;
}
