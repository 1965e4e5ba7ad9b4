/// Upstream catalogue abstraction
///
/// The aggregator talks to the upstream movie/TV catalogue through this
/// trait so the TMDB client can be swapped for a mock in tests. The two
/// operations mirror the two upstream call shapes the proxy consumes:
/// free-text category search and per-title provider lookup.
use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{CatalogueTitle, Provider, TitleKind},
};

pub mod tmdb;

pub use tmdb::TmdbClient;

/// Trait for upstream catalogue APIs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueApi: Send + Sync {
    /// Free-text search within one category, first page, upstream relevance
    /// order.
    async fn search_titles(&self, kind: TitleKind, query: &str) -> AppResult<Vec<CatalogueTitle>>;

    /// US subscription-tier (flatrate) providers for one title.
    ///
    /// An empty vec means the title is not streamable on any subscription
    /// service in the region, which is a normal outcome, not an error.
    async fn flatrate_providers(&self, kind: TitleKind, id: u64) -> AppResult<Vec<Provider>>;
}
