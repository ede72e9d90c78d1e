//! In-memory record store.
//!
//! Implements every repository trait from `docfolio-core` over plain
//! vectors, one `tokio::sync::RwLock` per collection. Reads clone out of a
//! read guard; writes take the write guard only for the append. Nothing is
//! persisted: state lives exactly as long as the process.

mod contact;
mod documentary;
mod producer;
mod testimonial;
mod user;

use docfolio_types::contact::Contact;
use docfolio_types::documentary::Documentary;
use docfolio_types::error::RepositoryError;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;
use docfolio_types::user::User;
use tokio::sync::RwLock;

use crate::seed::SeedData;

/// Process-local store holding every portfolio collection.
///
/// Collections keep insertion order, which is the order every list
/// operation returns.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documentaries: RwLock<Vec<Documentary>>,
    testimonials: RwLock<Vec<Testimonial>>,
    contacts: RwLock<Vec<Contact>>,
    producer: RwLock<Option<ProducerInfo>>,
    users: RwLock<Vec<User>>,
}

impl MemoryStore {
    /// A store with every collection empty and no producer record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store pre-populated from a seed document.
    pub fn seeded(seed: SeedData) -> Result<Self, RepositoryError> {
        seed.check()?;
        tracing::debug!(
            documentaries = seed.documentaries.len(),
            testimonials = seed.testimonials.len(),
            producer = seed.producer.is_some(),
            "seeding memory store"
        );
        Ok(Self {
            documentaries: RwLock::new(seed.documentaries),
            testimonials: RwLock::new(seed.testimonials),
            contacts: RwLock::new(Vec::new()),
            producer: RwLock::new(seed.producer),
            users: RwLock::new(seed.users),
        })
    }

    /// A store holding the bundled catalogue.
    pub fn bundled() -> Result<Self, RepositoryError> {
        Self::seeded(SeedData::bundled()?)
    }
}
