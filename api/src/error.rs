//! Unified error types for the headless RSS API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Feed synthesis errors (records that cannot become feed items)
//! - `ContentError`: Headless server client errors
//! - `AppError`: Application layer errors (wraps both for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - raised while turning article records into a feed
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed article record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}

/// Headless server client errors
///
/// Every variant is a fetch failure; the handler does not distinguish them
/// beyond logging.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Response has no data.content.search.result")]
    MissingResult,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Content source error: {0}")]
    Content(#[from] ContentError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(e) => {
                tracing::error!("Feed synthesis failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Malformed content record",
                    Some(e.to_string()),
                )
            }
            AppError::Content(e) => {
                tracing::error!("Content source error: {}", e);
                let details = match e {
                    ContentError::Api { status, .. } => {
                        format!("Headless server answered with status {}", status)
                    }
                    ContentError::Timeout(secs) => {
                        format!("Headless server did not answer within {}s", secs)
                    }
                    ContentError::GraphQl(msg) => msg.clone(),
                    ContentError::MissingResult => "Unexpected response shape".to_string(),
                    ContentError::Request(_) | ContentError::Deserialization(_) => {
                        "Headless server unreachable or returned invalid data".to_string()
                    }
                };
                (
                    StatusCode::BAD_GATEWAY,
                    "Content source unavailable",
                    Some(details),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
