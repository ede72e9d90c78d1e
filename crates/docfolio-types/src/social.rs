//! Typed social-media links attached to documentaries and the producer.
//!
//! The platform set is closed. Links arrive either as a JSON object or as a
//! string holding an encoded JSON object; both are parsed once, here, and
//! unknown platform keys are rejected.

use serde::{Deserialize, Deserializer, Serialize};

use std::fmt;
use std::str::FromStr;

/// Social platforms a link can point to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
    Youtube,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Platform; 5] = [
        Platform::Instagram,
        Platform::Tiktok,
        Platform::Linkedin,
        Platform::Youtube,
        Platform::Twitter,
    ];

    /// Human-readable platform name.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::Linkedin => "LinkedIn",
            Platform::Tiktok => "TikTok",
            Platform::Youtube => "YouTube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::Twitter => write!(f, "twitter"),
            Platform::Linkedin => write!(f, "linkedin"),
            Platform::Tiktok => write!(f, "tiktok"),
            Platform::Youtube => write!(f, "youtube"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instagram" => Ok(Platform::Instagram),
            "twitter" => Ok(Platform::Twitter),
            "linkedin" => Ok(Platform::Linkedin),
            "tiktok" => Ok(Platform::Tiktok),
            "youtube" => Ok(Platform::Youtube),
            other => Err(format!("unknown social platform: '{other}'")),
        }
    }
}

/// Platform-name to URL mapping. Absent platforms are `None` and are
/// omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl SocialLinks {
    /// URL for a platform, if one is set.
    pub fn get(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::Instagram => self.instagram.as_deref(),
            Platform::Twitter => self.twitter.as_deref(),
            Platform::Linkedin => self.linkedin.as_deref(),
            Platform::Tiktok => self.tiktok.as_deref(),
            Platform::Youtube => self.youtube.as_deref(),
        }
    }

    /// Set the URL for a platform (builder style).
    pub fn with(mut self, platform: Platform, url: impl Into<String>) -> Self {
        let slot = match platform {
            Platform::Instagram => &mut self.instagram,
            Platform::Twitter => &mut self.twitter,
            Platform::Linkedin => &mut self.linkedin,
            Platform::Tiktok => &mut self.tiktok,
            Platform::Youtube => &mut self.youtube,
        };
        *slot = Some(url.into());
        self
    }

    /// Present links in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &str)> + '_ {
        Platform::ALL
            .into_iter()
            .filter_map(|p| self.get(p).map(|url| (p, url)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl FromStr for SocialLinks {
    type Err = serde_json::Error;

    /// Parse the legacy string encoding (`"{\"instagram\":\"...\"}"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireLinks {
    Links(SocialLinks),
    Encoded(String),
}

/// Deserialize an optional `socialLinks` field that may be `null`, an
/// object, or a JSON-encoded string. An empty string means no links.
pub fn deserialize_links<'de, D>(deserializer: D) -> Result<Option<SocialLinks>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WireLinks>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireLinks::Links(links)) => Ok(Some(links)),
        Some(WireLinks::Encoded(s)) if s.trim().is_empty() => Ok(None),
        Some(WireLinks::Encoded(s)) => s
            .parse::<SocialLinks>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
