use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use streamfinder::api::{create_router, AppState};
use streamfinder::config::Config;
use streamfinder::services::catalogue::TmdbClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("streamfinder=debug,tower_http=info")),
        )
        .init();

    if config.tmdb_api_key.is_none() {
        tracing::warn!("TMDB_API_KEY is not set; search requests will fail until it is configured");
    }

    let catalogue = Arc::new(TmdbClient::from_config(&config));
    let state = AppState::new(catalogue);
    let app = create_router(state, config.allowed_origin.as_deref());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "streamfinder listening");
    axum::serve(listener, app).await?;

    Ok(())
}
