//! Driver implementation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::language::LanguageResolver;
use crate::normalizer;
use crate::prompt::Prompt;
use crate::suggest::{strip_forbidden, Candidate, TitleSuggester};
use crate::titledb::TitleDb;

use super::types::{FileOutcome, RunSummary};
use super::RenamerError;

/// Orchestrates a rename run over one directory.
///
/// Files are processed strictly one after the other: normalize, query,
/// optionally enrich, prompt, rename. Anything that goes wrong for a
/// single file is reported and the batch moves on.
pub struct RenameDriver {
    config: RunConfig,
    suggester: Arc<dyn TitleSuggester>,
    prompt: Arc<dyn Prompt>,
    titledb: Option<TitleDb>,
    resolver: Option<Arc<dyn LanguageResolver>>,
}

impl RenameDriver {
    /// Create a driver without the original-title feature.
    pub fn new(
        config: RunConfig,
        suggester: Arc<dyn TitleSuggester>,
        prompt: Arc<dyn Prompt>,
    ) -> Self {
        Self {
            config,
            suggester,
            prompt,
            titledb: None,
            resolver: None,
        }
    }

    /// Enable original-title substitution backed by the reference
    /// database and a language resolver.
    pub fn with_original_titles(
        mut self,
        titledb: TitleDb,
        resolver: Arc<dyn LanguageResolver>,
    ) -> Self {
        self.titledb = Some(titledb);
        self.resolver = Some(resolver);
        self
    }

    /// Process every regular file in the configured directory.
    pub async fn run(&self) -> Result<RunSummary, RenamerError> {
        let mut paths: Vec<PathBuf> = std::fs::read_dir(&self.config.directory)
            .map_err(|e| RenamerError::DirectoryRead {
                path: self.config.directory.display().to_string(),
                source: e,
            })?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        info!(
            "Scanning {} files in {}",
            paths.len(),
            self.config.directory.display()
        );

        let mut summary = RunSummary::default();

        for path in paths {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

            let outcome = self.process_file(&path, &file_name).await;
            summary.record(file_name, outcome);
        }

        Ok(summary)
    }

    async fn process_file(&self, path: &Path, file_name: &str) -> FileOutcome {
        let stem = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();

        if normalizer::is_canonical(&stem) && !self.config.process_all {
            return FileOutcome::Skipped;
        }

        let query = normalizer::normalize(&stem);
        if query.is_empty() {
            warn!("Nothing left of '{}' after cleanup", stem);
            return FileOutcome::NoMatch;
        }

        let mut candidates = match self.suggester.suggest(&query, &stem).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!("Suggestion lookup failed for '{}': {}", query, e);
                return FileOutcome::NoMatch;
            }
        };

        self.substitute_original_titles(&mut candidates).await;

        let formatted: Vec<String> = candidates.iter().map(Candidate::formatted).collect();

        if let Some(first) = formatted.first() {
            if first.to_lowercase() == stem.to_lowercase() {
                info!("{} - already right", stem);
                return FileOutcome::AlreadyCorrect;
            }
        }

        if formatted.is_empty() {
            info!("No results found for: {}", query);
            return FileOutcome::NoMatch;
        }

        let header = format!(
            "Results found for '{}' (searched as '{}'): select a title or anything else to skip",
            file_name, query
        );
        let Some(choice) = self.prompt.choose(&header, &formatted) else {
            info!("Not renaming '{}'", file_name);
            return FileOutcome::Declined;
        };
        let Some(new_stem) = formatted.get(choice) else {
            info!("Not renaming '{}'", file_name);
            return FileOutcome::Declined;
        };

        self.rename(path, new_stem).await
    }

    /// Replace display titles with original-language titles where the
    /// reference database and the language lookup agree with the
    /// requested language.
    async fn substitute_original_titles(&self, candidates: &mut [Candidate]) {
        let (Some(db), Some(resolver), Some(target)) = (
            &self.titledb,
            &self.resolver,
            self.config.language.as_deref(),
        ) else {
            return;
        };

        for candidate in candidates.iter_mut() {
            let Some(record) = db.lookup(&candidate.source_id) else {
                continue;
            };

            let language = match resolver.primary_language(&candidate.source_id).await {
                Ok(language) => language,
                Err(e) => {
                    warn!(
                        "Language lookup failed for '{}': {}",
                        candidate.source_id, e
                    );
                    None
                }
            };

            if let Some(language) = language {
                if language.eq_ignore_ascii_case(target) {
                    candidate.display_title = strip_forbidden(&record.original_title);
                }
            }
        }
    }

    async fn rename(&self, path: &Path, new_stem: &str) -> FileOutcome {
        let new_name = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => format!("{}.{}", new_stem, ext),
            None => new_stem.to_string(),
        };
        let target = path.with_file_name(&new_name);

        if target != path && target.exists() {
            warn!("Failed to rename '{}': target exists", path.display());
            return FileOutcome::Failed {
                reason: format!("target already exists: {}", new_name),
            };
        }

        match tokio::fs::rename(path, &target).await {
            Ok(()) => {
                info!("Renamed '{}' -> '{}'", path.display(), new_name);
                FileOutcome::Renamed { new_name }
            }
            Err(e) => {
                warn!("Failed to rename '{}': {}", path.display(), e);
                FileOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
