use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Rating assigned when a testimonial is created without one.
pub const DEFAULT_RATING: &str = "5";

/// An endorsement shown in the testimonials section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: RecordId,
    pub name: String,
    pub role: String,
    pub company: String,
    pub testimonial: String,
    pub avatar_url: String,
    /// String-encoded star rating. Not range-checked on write.
    pub rating: String,
}

impl Testimonial {
    pub fn from_insert(id: RecordId, new: NewTestimonial) -> Self {
        Self {
            id,
            name: new.name,
            role: new.role,
            company: new.company,
            testimonial: new.testimonial,
            avatar_url: new.avatar_url,
            rating: new.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
        }
    }

    /// Star count for rendering, when the rating parses into 1..=5.
    pub fn stars(&self) -> Option<u8> {
        self.rating
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=5).contains(n))
    }
}

/// Insert payload for a testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub testimonial: String,
    pub avatar_url: String,
    /// Defaults to "5" when omitted.
    #[serde(default)]
    pub rating: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(rating: Option<&str>) -> NewTestimonial {
        NewTestimonial {
            name: "Emily Thompson".to_string(),
            role: "Film Critic".to_string(),
            company: "The Guardian".to_string(),
            testimonial: "Sets the standard.".to_string(),
            avatar_url: "https://img/emily.jpg".to_string(),
            rating: rating.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_rating_defaults_to_five() {
        let t = Testimonial::from_insert(RecordId::from("1"), payload(None));
        assert_eq!(t.rating, "5");
        assert_eq!(t.stars(), Some(5));
    }

    #[test]
    fn test_rating_is_stored_verbatim() {
        let t = Testimonial::from_insert(RecordId::from("1"), payload(Some("9")));
        assert_eq!(t.rating, "9");
        assert_eq!(t.stars(), None);

        let t = Testimonial::from_insert(RecordId::from("2"), payload(Some("excellent")));
        assert_eq!(t.stars(), None);

        let t = Testimonial::from_insert(RecordId::from("3"), payload(Some("3")));
        assert_eq!(t.stars(), Some(3));
    }

    #[test]
    fn test_insert_payload_without_rating_field() {
        let json = r#"{"name":"A","role":"B","company":"C","testimonial":"D","avatarUrl":"E"}"#;
        let new: NewTestimonial = serde_json::from_str(json).unwrap();
        assert!(new.rating.is_none());
    }
}
