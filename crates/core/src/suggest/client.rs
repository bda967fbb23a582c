//! HTTP implementation of the suggestion client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::types::{strip_forbidden, Candidate};
use super::{SuggestError, TitleSuggester};

/// Default suggestion endpoint.
pub const DEFAULT_SUGGEST_URL: &str = "https://sg.media-imdb.com/suggests";

/// Client for the title suggestion endpoint.
///
/// Requests are keyed by the lowercased first character of the query:
/// `{base_url}/{letter}/{percent-encoded query}.json`.
pub struct SuggestClient {
    client: Client,
    base_url: String,
}

impl SuggestClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self, SuggestError> {
        Self::with_base_url(DEFAULT_SUGGEST_URL)
    }

    /// Create a client against a custom endpoint (used in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SuggestError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self, query: &str) -> Result<String, SuggestError> {
        let first = query
            .chars()
            .next()
            .ok_or(SuggestError::EmptyQuery)?
            .to_lowercase();

        Ok(format!(
            "{}/{}/{}.json",
            self.base_url,
            first,
            urlencoding::encode(query)
        ))
    }
}

#[async_trait]
impl TitleSuggester for SuggestClient {
    async fn suggest(
        &self,
        query: &str,
        comparison: &str,
    ) -> Result<Vec<Candidate>, SuggestError> {
        let url = self.build_url(query)?;

        debug!("Suggestion lookup: query='{}'", query);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SuggestError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let envelope = unwrap_envelope(&body)?;

        parse_candidates(&envelope, comparison)
    }
}

/// Recover the JSON document from the callback-style envelope.
///
/// The body looks like `callback_name({...})`. Everything up to and
/// including the first `(` is stripped and the trailing `)` dropped. When
/// the callback name itself contains a `(` that cut produces garbage, so
/// the fallback slices from the first `{` instead.
fn unwrap_envelope(body: &str) -> Result<String, SuggestError> {
    if let Some(idx) = body.find('(') {
        let inner = strip_closing(&body[idx + 1..]);
        if serde_json::from_str::<serde_json::Value>(inner).is_ok() {
            return Ok(inner.to_string());
        }
    }

    let idx = body
        .find('{')
        .ok_or_else(|| SuggestError::BadEnvelope("no JSON document found".to_string()))?;
    Ok(strip_closing(&body[idx..]).to_string())
}

fn strip_closing(inner: &str) -> &str {
    let inner = inner.trim_end();
    inner.strip_suffix(')').unwrap_or(inner)
}

/// Wire format of the suggestion document.
#[derive(Debug, Deserialize)]
struct SuggestDocument {
    #[serde(default)]
    d: Vec<SuggestEntry>,
}

#[derive(Debug, Deserialize)]
struct SuggestEntry {
    id: Option<String>,
    /// Display label.
    l: Option<String>,
    /// Type discriminator; feature-length films are marked `feature`.
    q: Option<String>,
    /// Release year.
    y: Option<u16>,
}

/// Filter the document down to feature-film candidates.
///
/// Short-circuit rule: when the element at index 0 formats to a
/// case-insensitive match of `comparison`, scanning stops - the top API
/// suggestion is authoritative when it matches expectation.
fn parse_candidates(document: &str, comparison: &str) -> Result<Vec<Candidate>, SuggestError> {
    let document: SuggestDocument = serde_json::from_str(document)
        .map_err(|e| SuggestError::ParseError(e.to_string()))?;

    let mut candidates = Vec::new();

    for (idx, entry) in document.d.iter().enumerate() {
        if entry.q.as_deref() != Some("feature") {
            continue;
        }
        let Some(year) = entry.y else {
            continue;
        };
        let (Some(id), Some(label)) = (&entry.id, &entry.l) else {
            continue;
        };

        let candidate = Candidate {
            display_title: strip_forbidden(label),
            year: Some(year),
            source_id: id.clone(),
        };
        let formatted = candidate.formatted();
        candidates.push(candidate);

        if idx == 0 && formatted.to_lowercase() == comparison.to_lowercase() {
            break;
        }
    }

    Ok(candidates)
}
