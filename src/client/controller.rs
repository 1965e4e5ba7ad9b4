use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::client::backend::SearchBackend;
use crate::client::display::{display_state, Phase};
use crate::client::store::PreferenceStore;
use crate::models::{filter_results, FilteredResult, SearchResult};

/// Quiet period a query must survive before a fetch fires.
pub const DEBOUNCE: Duration = Duration::from_millis(400);

/// Owns the query string, the debounced-fetch lifecycle, the user's service
/// selection, and the derived filtered view.
///
/// All waits are timer or I/O suspensions on the cooperative runtime; the
/// handle is `Clone` so input events can drive `set_query` as spawned tasks
/// while readers snapshot state through the same controller.
#[derive(Clone)]
pub struct ResultFilterController {
    backend: Arc<dyn SearchBackend>,
    store: Arc<dyn PreferenceStore>,
    debounce: Duration,
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    hydrated: bool,
    onboarded: bool,
    selected: HashSet<u32>,
    /// Live input value, updated on every keystroke.
    query: String,
    /// Trimmed value that survived the quiet period; drives fetches.
    committed_query: String,
    /// Unfiltered results of the most recently applied fetch.
    results: Vec<SearchResult>,
    is_loading: bool,
    error: Option<String>,
    /// Bumped per keystroke; a debounce wait only commits if still current.
    input_generation: u64,
    /// Bumped per issued fetch; a resolution only applies if still current.
    fetch_sequence: u64,
}

impl ResultFilterController {
    pub fn new(backend: Arc<dyn SearchBackend>, store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_debounce(backend, store, DEBOUNCE)
    }

    pub fn with_debounce(
        backend: Arc<dyn SearchBackend>,
        store: Arc<dyn PreferenceStore>,
        debounce: Duration,
    ) -> Self {
        Self {
            backend,
            store,
            debounce,
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// One-time preference read. Until this runs the controller reports
    /// `Phase::Hydrating`. A corrupt or absent stored value is the same as
    /// never having onboarded.
    pub async fn hydrate(&self) {
        let saved = self.store.load();
        let mut inner = self.inner.write().await;
        if let Some(ids) = saved {
            if !ids.is_empty() {
                inner.selected = ids.into_iter().collect();
                inner.onboarded = true;
            }
        }
        inner.hydrated = true;
    }

    /// Replaces the selection wholesale, persists it, and completes
    /// onboarding. Callers enforce that `ids` is non-empty.
    pub async fn save_selection(&self, ids: HashSet<u32>) {
        let mut sorted: Vec<u32> = ids.iter().copied().collect();
        sorted.sort_unstable();
        if let Err(error) = self.store.save(&sorted) {
            // Selection still applies for this session; only persistence lost
            tracing::warn!(%error, "failed to persist service selection");
        }

        let mut inner = self.inner.write().await;
        inner.selected = ids;
        inner.onboarded = true;
    }

    /// Records a keystroke and drives the debounce: waits the quiet period,
    /// and only the call not superseded by a newer keystroke commits the
    /// query and issues a fetch. Spawn one task per input event.
    pub async fn set_query(&self, text: &str) {
        let generation = {
            let mut inner = self.inner.write().await;
            inner.query = text.to_owned();
            inner.input_generation += 1;
            inner.input_generation
        };

        tokio::time::sleep(self.debounce).await;

        {
            let mut inner = self.inner.write().await;
            if generation != inner.input_generation {
                return; // a newer keystroke restarted the quiet period
            }
            inner.committed_query = inner.query.trim().to_owned();
        }

        self.refresh().await;
    }

    /// Issues a fetch for the committed query and applies the outcome unless
    /// a newer fetch was issued meanwhile.
    async fn refresh(&self) {
        let (query, sequence) = {
            let mut inner = self.inner.write().await;
            if !inner.onboarded {
                return; // onboarding screen has no search
            }
            if inner.committed_query.is_empty() {
                // Invalidate any in-flight fetch so its resolution cannot
                // repopulate the cleared view
                inner.fetch_sequence += 1;
                inner.results.clear();
                inner.is_loading = false;
                inner.error = None;
                return;
            }
            inner.fetch_sequence += 1;
            inner.is_loading = true;
            inner.error = None;
            (inner.committed_query.clone(), inner.fetch_sequence)
        };

        let outcome = self.backend.search(&query).await;

        let mut inner = self.inner.write().await;
        if sequence != inner.fetch_sequence {
            tracing::debug!(query, "discarding stale search response");
            return;
        }
        inner.is_loading = false;
        match outcome {
            Ok(results) => {
                inner.results = results;
            }
            Err(error) => {
                // Keep previous results visible behind the error state
                inner.error = Some(error.to_string());
            }
        }
    }

    /// Current top-level phase, with the result-area view derived afresh.
    pub async fn phase(&self) -> Phase {
        let inner = self.inner.read().await;
        if !inner.hydrated {
            return Phase::Hydrating;
        }
        if !inner.onboarded {
            return Phase::Onboarding;
        }
        let filtered = filter_results(&inner.results, &inner.selected).len();
        Phase::Ready(display_state(
            !inner.committed_query.is_empty(),
            inner.is_loading,
            inner.error.is_some(),
            inner.results.len(),
            filtered,
        ))
    }

    /// Results narrowed to the selected services. Recomputed per call, never
    /// cached.
    pub async fn filtered_results(&self) -> Vec<FilteredResult> {
        let inner = self.inner.read().await;
        filter_results(&inner.results, &inner.selected)
    }

    pub async fn selected_services(&self) -> HashSet<u32> {
        self.inner.read().await.selected.clone()
    }

    pub async fn error(&self) -> Option<String> {
        self.inner.read().await.error.clone()
    }
}
