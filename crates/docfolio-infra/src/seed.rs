//! Seed documents that pre-populate the in-memory store.
//!
//! The producer's catalogue ships compiled into the binary; a config key
//! may point at an alternative document with the same shape.

use std::collections::HashSet;
use std::path::Path;

use docfolio_types::documentary::Documentary;
use docfolio_types::error::RepositoryError;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;
use docfolio_types::user::User;
use serde::{Deserialize, Serialize};

const BUNDLED_SEED: &str = include_str!("../data/seed.json");

/// Initial contents of every collection. Records carry their ids.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub documentaries: Vec<Documentary>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub producer: Option<ProducerInfo>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl SeedData {
    /// The catalogue compiled into the binary.
    pub fn bundled() -> Result<Self, RepositoryError> {
        Self::from_json(BUNDLED_SEED)
    }

    /// Parse and check a seed document.
    pub fn from_json(json: &str) -> Result<Self, RepositoryError> {
        let seed: SeedData = serde_json::from_str(json)
            .map_err(|e| RepositoryError::InvalidSeed(e.to_string()))?;
        seed.check()?;
        Ok(seed)
    }

    /// Documentary ids must be unique; lookups by id would otherwise be
    /// ambiguous.
    pub fn check(&self) -> Result<(), RepositoryError> {
        let mut seen = HashSet::new();
        for doc in &self.documentaries {
            if !seen.insert(doc.id.as_str()) {
                return Err(RepositoryError::InvalidSeed(format!(
                    "duplicate documentary id '{}'",
                    doc.id
                )));
            }
        }
        Ok(())
    }
}

/// Read a seed document from disk, or fall back to the bundled one.
pub async fn load_seed(path: Option<&Path>) -> Result<SeedData, RepositoryError> {
    let Some(path) = path else {
        return SeedData::bundled();
    };

    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        RepositoryError::InvalidSeed(format!("failed to read {}: {e}", path.display()))
    })?;
    let seed = SeedData::from_json(&content)?;
    tracing::info!(
        path = %path.display(),
        documentaries = seed.documentaries.len(),
        testimonials = seed.testimonials.len(),
        "loaded seed document"
    );
    Ok(seed)
}
