//! Mock language resolver for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::language::{LanguageError, LanguageResolver};

/// Mock implementation of the [`LanguageResolver`] trait.
///
/// Languages are configured per identifier; unknown identifiers resolve
/// to `None`. The mock can also be switched into a failing mode to
/// exercise the driver's fallback path.
#[derive(Default)]
pub struct MockLanguageResolver {
    languages: Mutex<HashMap<String, String>>,
    failing: AtomicBool,
    calls: Mutex<Vec<String>>,
}

impl MockLanguageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the language returned for an identifier.
    pub async fn set_language(&self, source_id: &str, language: &str) {
        self.languages
            .lock()
            .await
            .insert(source_id.to_string(), language.to_string());
    }

    /// Make every subsequent lookup fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of lookups performed so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

#[async_trait]
impl LanguageResolver for MockLanguageResolver {
    async fn primary_language(
        &self,
        source_id: &str,
    ) -> Result<Option<String>, LanguageError> {
        self.calls.lock().await.push(source_id.to_string());

        if self.failing.load(Ordering::SeqCst) {
            return Err(LanguageError::ApiError {
                status: 500,
                message: "mock failure".to_string(),
            });
        }

        Ok(self.languages.lock().await.get(source_id).cloned())
    }
}
