use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while handling an analysis request.
///
/// Analyzer failures bubble untouched to the handler boundary, where the
/// `IntoResponse` impl turns them into a `{"error": ...}` JSON body. Input
/// faults map to 400, everything downstream to 500.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid request body: {0}")]
    InvalidPayload(String),

    #[error("URL is required")]
    MissingUrl,

    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("fetch failed: upstream returned {0}")]
    FetchStatus(reqwest::StatusCode),

    #[error("firecrawl request failed: {0}")]
    ScrapeTransport(reqwest::Error),

    #[error("firecrawl returned {status}: {body}")]
    ScrapeStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("firecrawl returned no content")]
    NoContent,
}

impl AnalyzeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) | Self::MissingUrl => StatusCode::BAD_REQUEST,
            Self::Fetch(_)
            | Self::FetchStatus(_)
            | Self::ScrapeTransport(_)
            | Self::ScrapeStatus { .. }
            | Self::NoContent => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalyzeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("❌ Analysis failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
