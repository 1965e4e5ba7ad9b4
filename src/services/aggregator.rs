use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{CatalogueTitle, Provider, SearchResult, TitleKind},
    services::catalogue::CatalogueApi,
};

/// Per-category cap on how many titles we look providers up for.
const RESULTS_PER_CATEGORY: usize = 10;

/// Aggregates upstream category searches into one enriched, ranked list.
///
/// Stateless per request: the only held state is the catalogue handle.
pub struct SearchAggregator {
    catalogue: Arc<dyn CatalogueApi>,
}

impl SearchAggregator {
    pub fn new(catalogue: Arc<dyn CatalogueApi>) -> Self {
        Self { catalogue }
    }

    /// Runs the full search pipeline for one query.
    ///
    /// Empty (post-trim) queries short-circuit to an empty result set with no
    /// upstream traffic. Both category searches must succeed; a failed
    /// per-title provider lookup only degrades that title to "no providers".
    pub async fn search(&self, query: &str) -> AppResult<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let (mut movies, mut series) = tokio::try_join!(
            self.catalogue.search_titles(TitleKind::Movie, query),
            self.catalogue.search_titles(TitleKind::Series, query),
        )?;

        movies.truncate(RESULTS_PER_CATEGORY);
        series.truncate(RESULTS_PER_CATEGORY);

        tracing::debug!(
            query,
            movies = movies.len(),
            series = series.len(),
            "category searches completed"
        );

        // Movies-then-series concatenation order is the ranking baseline the
        // stable partition below must preserve.
        let candidates: Vec<(TitleKind, CatalogueTitle)> = movies
            .into_iter()
            .map(|t| (TitleKind::Movie, t))
            .chain(series.into_iter().map(|t| (TitleKind::Series, t)))
            .collect();

        // Issue every provider lookup before awaiting any, keeping each task
        // paired with the candidate it belongs to.
        let mut lookups = Vec::with_capacity(candidates.len());
        for (kind, title) in candidates {
            let catalogue = Arc::clone(&self.catalogue);
            let title_id = title.id;
            let handle = tokio::spawn(async move {
                match catalogue.flatrate_providers(kind, title_id).await {
                    Ok(providers) => providers,
                    Err(error) => {
                        tracing::warn!(
                            %error,
                            title_id,
                            "provider lookup failed, treating title as unavailable"
                        );
                        Vec::new()
                    }
                }
            });
            lookups.push((kind, title, handle));
        }

        let mut results = Vec::with_capacity(lookups.len());
        for (kind, title, handle) in lookups {
            let providers: Vec<Provider> = match handle.await {
                Ok(providers) => providers,
                Err(error) => {
                    tracing::error!(%error, title_id = title.id, "provider lookup task failed");
                    Vec::new()
                }
            };
            results.push(SearchResult::from_catalogue(kind, title, providers));
        }

        // Stable partition: streamable titles first, everything else keeps
        // its relative order.
        results.sort_by_key(|r| r.providers.is_empty());

        tracing::info!(query, results = results.len(), "search completed");
        Ok(results)
    }
}
