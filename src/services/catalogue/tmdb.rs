/// TMDB v3 client
///
/// Implements `CatalogueApi` against api.themoviedb.org. Holds the API key
/// as an `Option` and refuses every call with a configuration error while it
/// is unset, before any HTTP is attempted.
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{CatalogueTitle, Provider, TitleKind},
    services::catalogue::CatalogueApi,
};
use async_trait::async_trait;

const LANGUAGE: &str = "en-US";
/// Territory used for all provider availability lookups.
const REGION: &str = "US";

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
}

impl TmdbClient {
    pub fn new(api_key: Option<String>, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_api_key.clone(), config.tmdb_api_url.clone())
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key.as_deref().ok_or(AppError::Configuration)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> AppResult<T> {
        let response = self.http_client.get(url).query(params).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "TMDB returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

/// URL segment for a category ("movie" / "tv").
fn category_path(kind: TitleKind) -> &'static str {
    match kind {
        TitleKind::Movie => "movie",
        TitleKind::Series => "tv",
    }
}

/// First four characters of a TMDB date field ("1999-03-31" → "1999").
fn year_of(date: &str) -> String {
    date.chars().take(4).collect()
}

// ============================================================================
// TMDB wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    overview: String,
}

impl From<MovieRecord> for CatalogueTitle {
    fn from(record: MovieRecord) -> Self {
        CatalogueTitle {
            id: record.id,
            title: record.title,
            year: year_of(&record.release_date),
            poster_path: record.poster_path,
            overview: record.overview,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TvRecord {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    first_air_date: String,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    overview: String,
}

impl From<TvRecord> for CatalogueTitle {
    fn from(record: TvRecord) -> Self {
        CatalogueTitle {
            id: record.id,
            title: record.name,
            year: year_of(&record.first_air_date),
            poster_path: record.poster_path,
            overview: record.overview,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProvidersResponse {
    #[serde(default)]
    results: HashMap<String, RegionOffers>,
}

#[derive(Debug, Deserialize)]
struct RegionOffers {
    #[serde(default)]
    flatrate: Vec<WireProvider>,
}

#[derive(Debug, Deserialize)]
struct WireProvider {
    provider_id: u32,
    provider_name: String,
    #[serde(default)]
    logo_path: Option<String>,
}

impl From<WireProvider> for Provider {
    fn from(wire: WireProvider) -> Self {
        Provider {
            provider_id: wire.provider_id,
            provider_name: wire.provider_name,
            provider_logo_path: wire.logo_path.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl CatalogueApi for TmdbClient {
    async fn search_titles(&self, kind: TitleKind, query: &str) -> AppResult<Vec<CatalogueTitle>> {
        let api_key = self.api_key()?;
        let url = format!("{}/search/{}", self.api_url, category_path(kind));
        let params = [
            ("api_key", api_key),
            ("query", query),
            ("language", LANGUAGE),
            ("page", "1"),
        ];

        let titles = match kind {
            TitleKind::Movie => {
                let page: SearchPage<MovieRecord> = self.get_json(&url, &params).await?;
                page.results.into_iter().map(Into::into).collect()
            }
            TitleKind::Series => {
                let page: SearchPage<TvRecord> = self.get_json(&url, &params).await?;
                page.results.into_iter().map(Into::into).collect()
            }
        };

        Ok(titles)
    }

    async fn flatrate_providers(&self, kind: TitleKind, id: u64) -> AppResult<Vec<Provider>> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/{}/{}/watch/providers",
            self.api_url,
            category_path(kind),
            id
        );

        let mut response: ProvidersResponse =
            self.get_json(&url, &[("api_key", api_key)]).await?;

        let providers = response
            .results
            .remove(REGION)
            .map(|offers| offers.flatrate.into_iter().map(Provider::from).collect())
            .unwrap_or_default();

        Ok(providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_is_configuration_error() {
        // The key check runs before any HTTP, so the URL is never contacted
        let client = TmdbClient::new(None, "http://127.0.0.1:9".to_string());

        let search = client.search_titles(TitleKind::Movie, "batman").await;
        assert!(matches!(search, Err(AppError::Configuration)));

        let providers = client.flatrate_providers(TitleKind::Series, 1396).await;
        assert!(matches!(providers, Err(AppError::Configuration)));
    }

    #[test]
    fn test_year_of_takes_leading_four_chars() {
        assert_eq!(year_of("1999-03-31"), "1999");
        assert_eq!(year_of(""), "");
        assert_eq!(year_of("20"), "20");
    }

    #[test]
    fn test_movie_record_normalizes() {
        let raw = r#"{
            "results": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-31",
                 "poster_path": "/abc.jpg", "overview": "A hacker learns the truth."},
                {"id": 604, "title": "The Matrix Reloaded"}
            ]
        }"#;
        let page: SearchPage<MovieRecord> = serde_json::from_str(raw).unwrap();
        let titles: Vec<CatalogueTitle> = page.results.into_iter().map(Into::into).collect();

        assert_eq!(titles[0].title, "The Matrix");
        assert_eq!(titles[0].year, "1999");
        assert_eq!(titles[0].poster_path.as_deref(), Some("/abc.jpg"));
        // Missing optional fields degrade to empty, not errors
        assert_eq!(titles[1].year, "");
        assert_eq!(titles[1].overview, "");
        assert!(titles[1].poster_path.is_none());
    }

    #[test]
    fn test_tv_record_uses_name_and_first_air_date() {
        let raw = r#"{"results": [{"id": 1396, "name": "Breaking Bad", "first_air_date": "2008-01-20"}]}"#;
        let page: SearchPage<TvRecord> = serde_json::from_str(raw).unwrap();
        let title: CatalogueTitle = page.results.into_iter().next().unwrap().into();

        assert_eq!(title.title, "Breaking Bad");
        assert_eq!(title.year, "2008");
    }

    #[test]
    fn test_providers_response_extracts_us_flatrate_only() {
        let raw = r#"{
            "results": {
                "US": {
                    "flatrate": [
                        {"provider_id": 8, "provider_name": "Netflix", "logo_path": "/n.jpg"},
                        {"provider_id": 9, "provider_name": "Prime Video"}
                    ],
                    "rent": [{"provider_id": 2, "provider_name": "Apple TV"}]
                },
                "GB": {"flatrate": [{"provider_id": 39, "provider_name": "Now TV"}]}
            }
        }"#;
        let mut response: ProvidersResponse = serde_json::from_str(raw).unwrap();
        let providers: Vec<Provider> = response
            .results
            .remove(REGION)
            .map(|offers| offers.flatrate.into_iter().map(Provider::from).collect())
            .unwrap_or_default();

        let ids: Vec<u32> = providers.iter().map(|p| p.provider_id).collect();
        assert_eq!(ids, vec![8, 9]);
        assert_eq!(providers[0].provider_logo_path, "/n.jpg");
        assert_eq!(providers[1].provider_logo_path, "");
    }

    #[test]
    fn test_missing_region_means_no_providers() {
        let response: ProvidersResponse = serde_json::from_str(r#"{"results": {}}"#).unwrap();
        assert!(response.results.is_empty());
    }
}
