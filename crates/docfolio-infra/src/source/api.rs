use docfolio_core::catalog::DataSource;
use docfolio_types::documentary::Documentary;
use docfolio_types::error::SourceError;
use docfolio_types::producer::ProducerInfo;
use docfolio_types::testimonial::Testimonial;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::join_url;

/// Prefix of the versioned JSON API.
pub const API_PREFIX: &str = "/api/v1";

/// The parts of the response envelope a client needs.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<EnvelopeError>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    message: String,
}

/// Reads from a running docfolio server.
#[derive(Debug, Clone)]
pub struct ApiDataSource {
    base_url: String,
    client: reqwest::Client,
}

impl ApiDataSource {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, resource: &str, path: &str) -> Result<T, SourceError> {
        let url = join_url(&self.base_url, &format!("{API_PREFIX}{path}"));
        tracing::debug!(%url, "fetching");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::fetch(resource, e))?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(resource.to_string()));
        }

        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| SourceError::decode(resource, e))?;

        if !status.is_success() {
            let reason = envelope
                .errors
                .first()
                .map(|e| e.message.clone())
                .unwrap_or_else(|| status.to_string());
            return Err(SourceError::fetch(resource, reason));
        }

        envelope
            .data
            .ok_or_else(|| SourceError::decode(resource, "response carried no data"))
    }
}

impl DataSource for ApiDataSource {
    async fn documentaries(&self) -> Result<Vec<Documentary>, SourceError> {
        self.get("documentaries", "/documentaries").await
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>, SourceError> {
        self.get("testimonials", "/testimonials").await
    }

    async fn producer(&self) -> Result<ProducerInfo, SourceError> {
        self.get("producer", "/producer").await
    }

    async fn featured(&self) -> Result<Documentary, SourceError> {
        self.get("featured documentary", "/documentaries/featured").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use serde_json::{Value, json};

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn envelope(data: Value) -> Json<Value> {
        Json(json!({ "data": data, "meta": {}, "errors": [], "_links": {} }))
    }

    #[tokio::test]
    async fn test_unwraps_envelope_and_maps_not_found() {
        let router = Router::new()
            .route(
                "/api/v1/testimonials",
                get(|| async {
                    envelope(json!([{
                        "id": "1", "name": "Sarah Chen", "role": "Director",
                        "company": "Netflix", "testimonial": "Great",
                        "avatarUrl": "https://img", "rating": "5"
                    }]))
                }),
            )
            .route(
                "/api/v1/producer",
                get(|| async {
                    (
                        AxumStatus::NOT_FOUND,
                        Json(json!({
                            "data": null,
                            "errors": [{"code": "NOT_FOUND", "message": "Producer info not found"}]
                        })),
                    )
                }),
            )
            .route(
                "/api/v1/documentaries",
                get(|| async {
                    (
                        AxumStatus::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "data": null,
                            "errors": [{"code": "INTERNAL_ERROR", "message": "boom"}]
                        })),
                    )
                }),
            );
        let source = ApiDataSource::new(spawn(router).await);

        let testimonials = source.testimonials().await.unwrap();
        assert_eq!(testimonials[0].name, "Sarah Chen");

        assert!(source.producer().await.unwrap_err().is_not_found());

        match source.documentaries().await.unwrap_err() {
            SourceError::Fetch { reason, .. } => assert_eq!(reason, "boom"),
            other => panic!("expected fetch error, got {other:?}"),
        }
    }
}
