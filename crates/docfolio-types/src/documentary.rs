use serde::{Deserialize, Serialize};

use std::fmt;

use crate::id::RecordId;
use crate::social::{self, SocialLinks};

/// Status tag that marks the documentary shown in the featured slot.
pub const FEATURED_STATUS: &str = "featured";

/// Category of a documentary.
///
/// The gallery knows four categories, but the set is open: any slug is a
/// valid category and filtering matches it exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub const SOCIAL_ISSUES: &'static str = "social-issues";
    pub const ENVIRONMENT: &'static str = "environment";
    pub const TECHNOLOGY: &'static str = "technology";
    pub const CULTURE: &'static str = "culture";

    /// Known categories in gallery order.
    pub const KNOWN: [&'static str; 4] = [
        Self::SOCIAL_ISSUES,
        Self::ENVIRONMENT,
        Self::TECHNOLOGY,
        Self::CULTURE,
    ];

    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Known categories as values, in gallery order.
    pub fn known() -> Vec<Category> {
        Self::KNOWN.iter().map(|s| Category::new(*s)).collect()
    }

    /// Display label ("social-issues" -> "Social Issues").
    ///
    /// Unknown slugs are title-cased word by word.
    pub fn label(&self) -> String {
        match self.0.as_str() {
            Self::SOCIAL_ISSUES => "Social Issues".to_string(),
            Self::ENVIRONMENT => "Environment".to_string(),
            Self::TECHNOLOGY => "Technology".to_string(),
            Self::CULTURE => "Culture".to_string(),
            other => other
                .split(['-', '_', ' '])
                .filter(|w| !w.is_empty())
                .map(|w| {
                    let mut chars = w.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                        None => String::new(),
                    }
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A published documentary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Documentary {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Release year label ("2024"); not necessarily numeric.
    pub year: String,
    pub image_url: String,
    pub trailer_url: Option<String>,
    pub full_doc_url: Option<String>,
    pub awards: Option<String>,
    /// Free-form tag ("featured", "trending", ...).
    pub status: Option<String>,
    /// Where to watch ("Netflix, Amazon Prime").
    pub platforms: Option<String>,
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "social::deserialize_links")]
    pub social_links: Option<SocialLinks>,
}

impl Documentary {
    /// Build the stored record from an insert payload and an assigned id.
    pub fn from_insert(id: RecordId, new: NewDocumentary) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
            year: new.year,
            image_url: new.image_url,
            trailer_url: new.trailer_url,
            full_doc_url: new.full_doc_url,
            awards: new.awards,
            status: new.status,
            platforms: new.platforms,
            runtime: new.runtime,
            social_links: new.social_links,
        }
    }

    /// Whether this record is tagged for the featured slot.
    pub fn is_featured(&self) -> bool {
        self.status.as_deref() == Some(FEATURED_STATUS)
    }
}

/// Insert payload for a documentary. The id is assigned by the store;
/// omitted optional fields are stored as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocumentary {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub year: String,
    pub image_url: String,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub full_doc_url: Option<String>,
    #[serde(default)]
    pub awards: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub platforms: Option<String>,
    #[serde(default)]
    pub runtime: Option<String>,
    #[serde(default, deserialize_with = "social::deserialize_links")]
    pub social_links: Option<SocialLinks>,
}

impl NewDocumentary {
    /// Payload with only the required fields set.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<Category>,
        year: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
            year: year.into(),
            image_url: image_url.into(),
            trailer_url: None,
            full_doc_url: None,
            awards: None,
            status: None,
            platforms: None,
            runtime: None,
            social_links: None,
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::social::Platform;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from("social-issues").label(), "Social Issues");
        assert_eq!(Category::from("environment").label(), "Environment");
        assert_eq!(Category::from("true-crime").label(), "True Crime");
    }

    #[test]
    fn test_known_categories_in_gallery_order() {
        let known: Vec<String> = Category::known().iter().map(|c| c.to_string()).collect();
        assert_eq!(known, vec!["social-issues", "environment", "technology", "culture"]);
    }

    #[test]
    fn test_insert_payload_defaults_optional_fields() {
        let json = r#"{
            "title": "Green Cities",
            "description": "Urban sustainability.",
            "category": "environment",
            "year": "2022",
            "imageUrl": "https://img/green.jpg"
        }"#;
        let new: NewDocumentary = serde_json::from_str(json).unwrap();
        assert!(new.trailer_url.is_none());
        assert!(new.status.is_none());
        assert!(new.social_links.is_none());
    }

    #[test]
    fn test_record_serializes_absent_optionals_as_null() {
        let doc = Documentary::from_insert(
            RecordId::from("1"),
            NewDocumentary::new("T", "D", "culture", "2021", "https://img"),
        );
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["imageUrl"], "https://img");
        assert!(value["trailerUrl"].is_null());
        assert!(value["socialLinks"].is_null());
        assert!(!doc.is_featured());
    }

    #[test]
    fn test_record_accepts_legacy_encoded_social_links() {
        let json = r##"{
            "id": "3",
            "title": "Ocean's Last Stand",
            "description": "Marine ecosystems.",
            "category": "environment",
            "year": "2022",
            "imageUrl": "https://img/ocean.jpg",
            "trailerUrl": "#",
            "fullDocUrl": "#",
            "awards": "Eco Winner",
            "status": "featured",
            "platforms": "Netflix",
            "runtime": "85 minutes",
            "socialLinks": "{\"tiktok\":\"#\",\"youtube\":\"#\"}"
        }"##;
        let doc: Documentary = serde_json::from_str(json).unwrap();
        assert!(doc.is_featured());
        assert_eq!(doc.social_links.unwrap().get(Platform::Youtube), Some("#"));
    }
}
