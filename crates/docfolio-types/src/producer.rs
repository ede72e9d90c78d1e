use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::social::{self, SocialLinks};

/// Biographical record of the producer. At most one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInfo {
    pub id: RecordId,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Display labels such as "5+ Years" or "10 Released".
    pub experience: String,
    pub documentaries_count: String,
    pub awards_count: String,
    pub countries_count: String,
    #[serde(default, deserialize_with = "social::deserialize_links")]
    pub social_links: Option<SocialLinks>,
}

impl ProducerInfo {
    /// Full replacement of the singleton: every field comes from the
    /// payload, only the id is carried over.
    pub fn from_insert(id: RecordId, new: NewProducerInfo) -> Self {
        Self {
            id,
            name: new.name,
            title: new.title,
            bio: new.bio,
            email: new.email,
            phone: new.phone,
            location: new.location,
            experience: new.experience,
            documentaries_count: new.documentaries_count,
            awards_count: new.awards_count,
            countries_count: new.countries_count,
            social_links: new.social_links,
        }
    }
}

/// Replacement payload for the producer singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProducerInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub experience: String,
    pub documentaries_count: String,
    pub awards_count: String,
    pub countries_count: String,
    #[serde(default, deserialize_with = "social::deserialize_links")]
    pub social_links: Option<SocialLinks>,
}
