//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (docfolio-infra) implements. The core crate never depends on any
//! specific storage technology.
//!
//! Every collection keeps insertion order; that is the only ordering the
//! store guarantees.

pub mod contact;
pub mod documentary;
pub mod producer;
pub mod testimonial;
pub mod user;

pub use contact::ContactRepository;
pub use documentary::DocumentaryRepository;
pub use producer::ProducerRepository;
pub use testimonial::TestimonialRepository;
pub use user::UserRepository;

/// The complete data store: every record kind behind one handle.
///
/// Implemented automatically for any type providing all five repositories.
pub trait PortfolioStore:
    DocumentaryRepository
    + TestimonialRepository
    + ContactRepository
    + ProducerRepository
    + UserRepository
{
}

impl<T> PortfolioStore for T where
    T: DocumentaryRepository
        + TestimonialRepository
        + ContactRepository
        + ProducerRepository
        + UserRepository
{
}
