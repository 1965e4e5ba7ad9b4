use async_trait::async_trait;
use serde::Deserialize;

use crate::models::SearchResult;

/// Client-side search failure. `Display` is safe to show to the user.
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    /// The proxy answered with its `{"error": …}` shape.
    #[error("{0}")]
    Server(String),

    /// Transport or decode failure talking to the proxy.
    #[error("Search failed. Please try again.")]
    Transport(#[from] reqwest::Error),
}

/// Seam between the controller and the `/search` proxy.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, BackendError>;
}

/// Two-shape body of `GET /search`: `results` on success, `error` otherwise.
#[derive(Debug, Deserialize)]
struct ApiSearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
    #[serde(default)]
    error: Option<String>,
}

/// Talks to the streamfinder proxy over HTTP.
pub struct HttpSearchBackend {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpSearchBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, BackendError> {
        let url = format!("{}/search", self.base_url);
        let body: ApiSearchResponse = self
            .http_client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?
            .json()
            .await?;

        match body.error {
            Some(message) => Err(BackendError::Server(message)),
            None => Ok(body.results),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_decodes() {
        let body: ApiSearchResponse =
            serde_json::from_str(r#"{"error": "Search failed. Please try again."}"#).unwrap();
        assert!(body.results.is_empty());
        assert_eq!(body.error.as_deref(), Some("Search failed. Please try again."));
    }

    #[test]
    fn test_results_body_decodes() {
        let raw = r#"{"results": [{"id": 603, "kind": "movie", "title": "The Matrix",
            "year": "1999", "posterPath": null, "overview": "",
            "providers": [{"providerId": 8, "providerName": "Netflix", "providerLogoPath": ""}]}]}"#;
        let body: ApiSearchResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(body.results.len(), 1);
        assert_eq!(body.results[0].providers[0].provider_id, 8);
        assert!(body.error.is_none());
    }
}
