//! OMDb-style metadata client.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::debug;

use super::{LanguageError, LanguageResolver};

/// Default metadata endpoint.
pub const DEFAULT_METADATA_URL: &str = "http://www.omdbapi.com";

/// Metadata client configuration.
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    /// API key (required).
    pub api_key: String,
    /// Base URL override (used in tests).
    pub base_url: Option<String>,
}

/// Metadata API client.
///
/// Lookups are memoized per identifier for the lifetime of the client, so
/// a run never pays more than one round-trip per title.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    cache: Mutex<HashMap<String, Option<String>>>,
}

impl OmdbClient {
    /// Create a new metadata client.
    pub fn new(config: OmdbConfig) -> Result<Self, LanguageError> {
        if config.api_key.is_empty() {
            return Err(LanguageError::NotConfigured(
                "metadata API key is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_METADATA_URL.to_string());

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            cache: Mutex::new(HashMap::new()),
        })
    }
}

#[async_trait]
impl LanguageResolver for OmdbClient {
    async fn primary_language(
        &self,
        source_id: &str,
    ) -> Result<Option<String>, LanguageError> {
        if let Some(hit) = self.cache.lock().await.get(source_id) {
            return Ok(hit.clone());
        }

        debug!("Metadata lookup: id='{}'", source_id);

        let url = format!("{}/", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", source_id),
                ("type", "movie"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LanguageError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let movie: OmdbMovieResponse = response.json().await.map_err(|e| {
            LanguageError::ParseError(format!("Failed to parse movie response: {}", e))
        })?;

        let language = movie.language.as_deref().and_then(first_language);

        self.cache
            .lock()
            .await
            .insert(source_id.to_string(), language.clone());

        Ok(language)
    }
}

/// Wire format of the metadata response, reduced to the one field used.
#[derive(Debug, Deserialize)]
struct OmdbMovieResponse {
    #[serde(rename = "Language")]
    language: Option<String>,
}

/// First entry of a possibly comma-separated language list.
fn first_language(field: &str) -> Option<String> {
    field
        .split(',')
        .next()
        .map(str::trim)
        .filter(|entry| !entry.is_empty() && *entry != "N/A")
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_language_single_entry() {
        assert_eq!(first_language("French"), Some("French".to_string()));
    }

    #[test]
    fn test_first_language_takes_first_of_list() {
        assert_eq!(
            first_language("French, English, German"),
            Some("French".to_string())
        );
    }

    #[test]
    fn test_first_language_empty_or_placeholder() {
        assert_eq!(first_language(""), None);
        assert_eq!(first_language("N/A"), None);
    }

    #[test]
    fn test_new_requires_api_key() {
        let result = OmdbClient::new(OmdbConfig {
            api_key: String::new(),
            base_url: None,
        });
        assert!(matches!(result, Err(LanguageError::NotConfigured(_))));
    }

    #[test]
    fn test_response_parsing() {
        let movie: OmdbMovieResponse =
            serde_json::from_str(r#"{"Title":"Amelie","Language":"French, Russian"}"#).unwrap();
        assert_eq!(
            movie.language.as_deref().and_then(first_language),
            Some("French".to_string())
        );
    }
}
