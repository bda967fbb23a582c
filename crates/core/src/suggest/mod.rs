//! Remote title suggestions.
//!
//! The suggestion endpoint answers with a JSON document wrapped in a
//! callback-style envelope; [`SuggestClient`] unwraps it and filters the
//! entries down to feature-length films with a release year.

mod client;
mod types;

pub use client::{SuggestClient, DEFAULT_SUGGEST_URL};
pub use types::{strip_forbidden, Candidate};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the suggestion endpoint.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// The callback envelope did not contain a JSON document.
    #[error("Malformed suggestion envelope: {0}")]
    BadEnvelope(String),

    /// Failed to parse the unwrapped JSON document.
    #[error("Failed to parse suggestion response: {0}")]
    ParseError(String),

    /// The normalized query was empty, nothing to search for.
    #[error("Empty search query")]
    EmptyQuery,
}

/// Trait for title suggestion backends.
///
/// `comparison` is the caller's already-canonicalized name for the file;
/// implementations use it for the index-0 short-circuit rule.
#[async_trait]
pub trait TitleSuggester: Send + Sync {
    /// Look up title candidates for a normalized query.
    ///
    /// Remote ordering is preserved; the first candidate is the presumed
    /// best match.
    async fn suggest(&self, query: &str, comparison: &str)
        -> Result<Vec<Candidate>, SuggestError>;
}
