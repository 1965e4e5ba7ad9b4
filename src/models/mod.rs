use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod streaming_service;

pub use streaming_service::{service_by_id, StreamingService, STREAMING_SERVICES};

/// Category of a searchable title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleKind {
    Movie,
    Series,
}

/// A title as returned by a catalogue category search, before provider
/// enrichment. The kind is carried separately by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueTitle {
    pub id: u64,
    pub title: String,
    /// Four-digit release / first-air year, or empty when unknown.
    pub year: String,
    pub poster_path: Option<String>,
    pub overview: String,
}

/// A subscription-tier streaming offering for one title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub provider_id: u32,
    pub provider_name: String,
    /// Catalogue logo path, empty string when the upstream omits it.
    #[serde(default)]
    pub provider_logo_path: String,
}

/// A single normalized search result as served by the `/search` proxy.
///
/// `providers` holds only US flatrate (subscription) offerings; rental,
/// purchase, and ad-supported tiers are filtered out upstream of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: u64,
    pub kind: TitleKind,
    pub title: String,
    pub year: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub providers: Vec<Provider>,
}

impl SearchResult {
    /// Assembles a result from a tagged catalogue title and its provider
    /// lookup outcome.
    pub fn from_catalogue(kind: TitleKind, title: CatalogueTitle, providers: Vec<Provider>) -> Self {
        Self {
            id: title.id,
            kind,
            title: title.title,
            year: title.year,
            poster_path: title.poster_path,
            overview: title.overview,
            providers,
        }
    }
}

/// Success body of `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// A search result narrowed to the services the user subscribes to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredResult {
    #[serde(flatten)]
    pub result: SearchResult,
    /// Subset of `result.providers` the user has selected, in provider order.
    pub matched_providers: Vec<Provider>,
}

/// Narrows `results` to those available on at least one selected service.
///
/// Pure derivation: input order is preserved, `matched_providers` is the
/// ordered intersection of each result's providers with `selected`, and
/// results without a match are dropped entirely.
pub fn filter_results(results: &[SearchResult], selected: &HashSet<u32>) -> Vec<FilteredResult> {
    results
        .iter()
        .filter_map(|result| {
            let matched: Vec<Provider> = result
                .providers
                .iter()
                .filter(|p| selected.contains(&p.provider_id))
                .cloned()
                .collect();
            if matched.is_empty() {
                None
            } else {
                Some(FilteredResult {
                    result: result.clone(),
                    matched_providers: matched,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: u32) -> Provider {
        Provider {
            provider_id: id,
            provider_name: format!("Service {id}"),
            provider_logo_path: String::new(),
        }
    }

    fn result(id: u64, provider_ids: &[u32]) -> SearchResult {
        SearchResult {
            id,
            kind: TitleKind::Movie,
            title: format!("Title {id}"),
            year: "1999".to_string(),
            poster_path: None,
            overview: String::new(),
            providers: provider_ids.iter().copied().map(provider).collect(),
        }
    }

    #[test]
    fn test_matched_providers_is_ordered_intersection() {
        let results = vec![result(1, &[8, 15, 9])];
        let selected: HashSet<u32> = [9, 8].into_iter().collect();

        let filtered = filter_results(&results, &selected);
        assert_eq!(filtered.len(), 1);
        let ids: Vec<u32> = filtered[0]
            .matched_providers
            .iter()
            .map(|p| p.provider_id)
            .collect();
        // Provider order of the source result, not of the selection set
        assert_eq!(ids, vec![8, 9]);
    }

    #[test]
    fn test_results_without_matches_are_dropped() {
        let results = vec![result(1, &[8]), result(2, &[337]), result(3, &[])];
        let selected: HashSet<u32> = [8].into_iter().collect();

        let filtered = filter_results(&results, &selected);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].result.id, 1);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let results = vec![result(3, &[8]), result(1, &[8, 9]), result(2, &[9])];
        let selected: HashSet<u32> = [8, 9].into_iter().collect();

        let ids: Vec<u64> = filter_results(&results, &selected)
            .iter()
            .map(|f| f.result.id)
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let results = vec![result(1, &[8, 9]), result(2, &[15])];
        let selected: HashSet<u32> = [8, 15].into_iter().collect();

        let first = filter_results(&results, &selected);
        let second = filter_results(&results, &selected);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_selection_matches_nothing() {
        let results = vec![result(1, &[8, 9])];
        let filtered = filter_results(&results, &HashSet::new());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_search_result_serializes_camel_case() {
        let json = serde_json::to_value(result(603, &[8])).unwrap();
        assert_eq!(json["kind"], "movie");
        assert_eq!(json["posterPath"], serde_json::Value::Null);
        assert_eq!(json["providers"][0]["providerId"], 8);
        assert_eq!(json["providers"][0]["providerLogoPath"], "");
    }

    #[test]
    fn test_filtered_result_flattens_base_fields() {
        let results = vec![result(603, &[8])];
        let selected: HashSet<u32> = [8].into_iter().collect();
        let json = serde_json::to_value(&filter_results(&results, &selected)[0]).unwrap();
        assert_eq!(json["id"], 603);
        assert_eq!(json["matchedProviders"][0]["providerId"], 8);
    }
}
