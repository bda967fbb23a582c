//! Per-title language lookups.
//!
//! Used to decide whether a candidate's original-language title should
//! replace the suggested one. Failures here must never abort the run; the
//! driver degrades them to "language unknown".

mod omdb;

pub use omdb::{OmdbClient, OmdbConfig, DEFAULT_METADATA_URL};

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when resolving a title's language.
#[derive(Debug, Error)]
pub enum LanguageError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse the metadata response.
    #[error("Failed to parse metadata response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// Trait for language lookup backends.
#[async_trait]
pub trait LanguageResolver: Send + Sync {
    /// Primary spoken language of the movie identified by `source_id`,
    /// or `None` when the metadata does not say.
    async fn primary_language(&self, source_id: &str)
        -> Result<Option<String>, LanguageError>;
}
