use std::path::PathBuf;

use docfolio_core::catalog::{DataSource, pick_featured};
use docfolio_types::documentary::Documentary;
use docfolio_types::error::SourceError;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;
use serde::de::DeserializeOwned;

use super::{is_url, join_url};
use crate::publish::{DOCUMENTARIES_FILE, PRODUCER_FILE, TESTIMONIALS_FILE};

#[derive(Debug, Clone)]
enum Location {
    Dir(PathBuf),
    Url(String),
}

/// Reads the documents written by [`crate::publish::export_static`], from
/// a local directory or an HTTP base URL.
#[derive(Debug, Clone)]
pub struct StaticDataSource {
    location: Location,
    client: reqwest::Client,
}

impl StaticDataSource {
    /// `location` is either a directory path or an `http(s)://` base URL.
    pub fn new(location: &str) -> Self {
        let location = if is_url(location) {
            Location::Url(location.to_string())
        } else {
            Location::Dir(PathBuf::from(location))
        };
        Self {
            location,
            client: reqwest::Client::new(),
        }
    }

    async fn read_document<T: DeserializeOwned>(&self, name: &str) -> Result<T, SourceError> {
        let body = match &self.location {
            Location::Dir(dir) => {
                let path = dir.join(name);
                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| SourceError::fetch(name, format!("{}: {e}", path.display())))?
            }
            Location::Url(base) => {
                let url = join_url(base, name);
                let response = self
                    .client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| SourceError::fetch(name, e))?;
                if !response.status().is_success() {
                    return Err(SourceError::fetch(
                        name,
                        format!("{url} returned {}", response.status()),
                    ));
                }
                response.text().await.map_err(|e| SourceError::fetch(name, e))?
            }
        };

        serde_json::from_str(&body).map_err(|e| SourceError::decode(name, e))
    }
}

impl DataSource for StaticDataSource {
    async fn documentaries(&self) -> Result<Vec<Documentary>, SourceError> {
        self.read_document(DOCUMENTARIES_FILE).await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, SourceError> {
        self.read_document(TESTIMONIALS_FILE).await
    }

    async fn producer(&self) -> Result<ProducerInfo, SourceError> {
        self.read_document::<Option<ProducerInfo>>(PRODUCER_FILE)
            .await?
            .ok_or_else(|| SourceError::NotFound("producer".to_string()))
    }

    async fn featured(&self) -> Result<Documentary, SourceError> {
        let documentaries = self.documentaries().await?;
        pick_featured(&documentaries)
            .cloned()
            .ok_or_else(|| SourceError::NotFound("featured documentary".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::publish::export_static;
    use docfolio_core::catalog::HomePage;

    #[tokio::test]
    async fn test_reads_exported_documents() {
        let dir = tempfile::tempdir().unwrap();
        export_static(&MemoryStore::bundled().unwrap(), dir.path())
            .await
            .unwrap();

        let source = StaticDataSource::new(&dir.path().display().to_string());
        let page = HomePage::load(&source).await;

        assert!(page.failures().is_empty());
        assert_eq!(page.gallery(6).filtered().len(), 7);
        assert_eq!(page.testimonials().len(), 3);
        assert_eq!(page.featured().unwrap().id.as_str(), "1");
        assert_eq!(page.producer().unwrap().name, "Perrine Keramphele");
    }

    #[tokio::test]
    async fn test_featured_falls_back_to_first_record() {
        let dir = tempfile::tempdir().unwrap();
        let json = r#"[
            {"id":"a","title":"A","description":"d","category":"culture","year":"2020","imageUrl":"x","status":"trending"},
            {"id":"b","title":"B","description":"d","category":"culture","year":"2021","imageUrl":"x"}
        ]"#;
        tokio::fs::write(dir.path().join(DOCUMENTARIES_FILE), json)
            .await
            .unwrap();

        let source = StaticDataSource::new(&dir.path().display().to_string());
        assert_eq!(source.featured().await.unwrap().id.as_str(), "a");
    }

    #[tokio::test]
    async fn test_empty_and_missing_documents() {
        let dir = tempfile::tempdir().unwrap();
        export_static(&MemoryStore::empty(), dir.path()).await.unwrap();
        let source = StaticDataSource::new(&dir.path().display().to_string());

        assert!(source.featured().await.unwrap_err().is_not_found());
        assert!(source.producer().await.unwrap_err().is_not_found());

        let missing = StaticDataSource::new(&dir.path().join("nope").display().to_string());
        let err = missing.documentaries().await.unwrap_err();
        assert!(matches!(err, SourceError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join(TESTIMONIALS_FILE), "{not json")
            .await
            .unwrap();
        let source = StaticDataSource::new(&dir.path().display().to_string());
        assert!(matches!(
            source.testimonials().await.unwrap_err(),
            SourceError::Decode { .. }
        ));
    }
}
