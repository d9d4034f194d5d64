//! Error types for the persona pipeline.

use thiserror::Error;

/// Errors surfaced by the persona pipeline.
///
/// Transport and parse errors inside a single sub-fetch are recovered locally
/// by the scraper (logged, zero results); the variants here are the ones that
/// cross component boundaries.
#[derive(Debug, Error)]
pub enum PersonaError {
    /// Profile URL carries neither a `/user/` nor a `/u/` marker.
    #[error("Invalid Reddit profile URL: {url}")]
    InvalidProfileUrl { url: String },

    /// HTTP transport failure.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Report file could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The combined fetch yielded zero items; no report is written.
    #[error("No content found for user '{username}' - cannot generate persona")]
    NoContent { username: String },
}
