use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("TMDB API key is not configured")]
    Configuration,

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    /// Converts to the `{"error": …}` wire shape.
    ///
    /// Every failure maps to 500 with a user-safe message; diagnostic detail
    /// stays in the server log and never reaches the response body.
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Configuration => {
                tracing::error!("TMDB_API_KEY is not set; rejecting search request");
                "Search is not configured on this server."
            }
            other => {
                tracing::error!(error = %other, "search request failed");
                "Search failed. Please try again."
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
