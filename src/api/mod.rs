use std::sync::Arc;

use axum::{
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::middleware::request_id::request_id_middleware;
use crate::services::{catalogue::CatalogueApi, SearchAggregator};

pub mod search;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<SearchAggregator>,
}

impl AppState {
    pub fn new(catalogue: Arc<dyn CatalogueApi>) -> Self {
        Self {
            aggregator: Arc::new(SearchAggregator::new(catalogue)),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState, allowed_origin: Option<&str>) -> Router {
    let cors = allowed_origin
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
        .map(|origin| {
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(Any)
                .allow_headers(Any)
        })
        .unwrap_or_else(CorsLayer::permissive);

    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search::search))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
