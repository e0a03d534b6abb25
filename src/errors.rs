//! Error types shared by the upstream clients and the search pipeline

use thiserror::Error;

/// Places API statuses that signal a transient condition on Google's side
const RETRYABLE_PLACES_STATUSES: [&str; 2] = ["OVER_QUERY_LIMIT", "UNKNOWN_ERROR"];

/// Failure talking to one of the third-party services
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Places API returned {status}: {message}")]
    PlacesStatus { status: String, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UpstreamError {
    pub fn is_retryable(&self) -> bool {
        match self {
            UpstreamError::Network(_) => true,
            UpstreamError::Api { status, .. } => matches!(status, 408 | 429) || *status >= 500,
            UpstreamError::PlacesStatus { status, .. } => {
                RETRYABLE_PLACES_STATUSES.contains(&status.as_str())
            }
            UpstreamError::InvalidResponse(_) => false,
            UpstreamError::Json(_) => false,
        }
    }
}

/// Failure of a whole meeting spot search
#[derive(Debug, Error)]
pub enum FinderError {
    #[error("Failed to generate suggestions: {0}")]
    Suggestions(#[source] UpstreamError),

    #[error("Failed to resolve any of {attempted} candidates: {source}")]
    Resolution {
        attempted: usize,
        #[source]
        source: UpstreamError,
    },
}
