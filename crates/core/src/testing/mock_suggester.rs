//! Mock title suggester for testing.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::suggest::{Candidate, SuggestError, TitleSuggester};

/// Mock implementation of the [`TitleSuggester`] trait.
///
/// Responses are queued in call order; once the queue runs dry every call
/// answers with an empty candidate list. Calls are recorded for
/// assertions.
#[derive(Default)]
pub struct MockSuggester {
    responses: Mutex<VecDeque<Result<Vec<Candidate>, SuggestError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockSuggester {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub async fn queue_candidates(&self, candidates: Vec<Candidate>) {
        self.responses.lock().await.push_back(Ok(candidates));
    }

    /// Queue an error response.
    pub async fn queue_error(&self, error: SuggestError) {
        self.responses.lock().await.push_back(Err(error));
    }

    /// Number of lookups performed so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    /// Recorded `(query, comparison)` pairs, in call order.
    pub async fn recorded_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl TitleSuggester for MockSuggester {
    async fn suggest(
        &self,
        query: &str,
        comparison: &str,
    ) -> Result<Vec<Candidate>, SuggestError> {
        self.calls
            .lock()
            .await
            .push((query.to_string(), comparison.to_string()));

        match self.responses.lock().await.pop_front() {
            Some(response) => response,
            None => Ok(Vec::new()),
        }
    }
}
