//! Rename driver integration tests.
//!
//! These drive full runs over temp directories with the mock seams:
//! - canonical files are skipped without any network call
//! - missing results and degraded lookups leave files untouched
//! - selections, declines and collisions
//! - original-title substitution and its fallback paths

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use marquee_core::{
    testing::{MockLanguageResolver, MockSuggester, ScriptedPrompt},
    Candidate, FileOutcome, RenameDriver, RunConfig, SuggestError, TitleDb, TitleRecord,
};

/// Test helper bundling a temp directory with the mock seams.
struct TestHarness {
    temp_dir: TempDir,
    suggester: Arc<MockSuggester>,
    resolver: Arc<MockLanguageResolver>,
    prompt: Arc<ScriptedPrompt>,
}

impl TestHarness {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
            suggester: Arc::new(MockSuggester::new()),
            resolver: Arc::new(MockLanguageResolver::new()),
            prompt: Arc::new(ScriptedPrompt::new()),
        }
    }

    fn create_file(&self, name: &str) {
        fs::write(self.temp_dir.path().join(name), "movie bytes").expect("Failed to write file");
    }

    fn exists(&self, name: &str) -> bool {
        self.temp_dir.path().join(name).exists()
    }

    fn config(&self) -> RunConfig {
        RunConfig::new(self.temp_dir.path())
    }

    fn driver(&self, config: RunConfig) -> RenameDriver {
        RenameDriver::new(config, self.suggester.clone(), self.prompt.clone())
    }

    fn driver_with_original_titles(&self, config: RunConfig, db: TitleDb) -> RenameDriver {
        RenameDriver::new(config, self.suggester.clone(), self.prompt.clone())
            .with_original_titles(db, self.resolver.clone())
    }
}

fn candidate(title: &str, year: u16, id: &str) -> Candidate {
    Candidate {
        display_title: title.to_string(),
        year: Some(year),
        source_id: id.to_string(),
    }
}

fn amelie_db() -> TitleDb {
    TitleDb::from_records(vec![TitleRecord {
        id: "tt0211915".to_string(),
        primary_title: "Amelie".to_string(),
        original_title: "Le Fabuleux Destin d'Amelie Poulain".to_string(),
    }])
}

#[tokio::test]
async fn test_no_results_leaves_file_untouched() {
    let harness = TestHarness::new();
    harness.create_file("Se7en.2017.720p.mkv");

    let summary = harness.driver(harness.config()).run().await.unwrap();

    assert_eq!(
        summary.outcome_for("Se7en.2017.720p.mkv"),
        Some(&FileOutcome::NoMatch)
    );
    assert!(harness.exists("Se7en.2017.720p.mkv"));

    // The normalizer stripped the resolution marker before querying.
    let calls = harness.suggester.recorded_calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Se7en 2017");
}

#[tokio::test]
async fn test_canonical_file_skipped_without_network_call() {
    let harness = TestHarness::new();
    harness.create_file("Heat (1995).mkv");

    let summary = harness.driver(harness.config()).run().await.unwrap();

    assert_eq!(
        summary.outcome_for("Heat (1995).mkv"),
        Some(&FileOutcome::Skipped)
    );
    assert!(harness.exists("Heat (1995).mkv"));
    assert_eq!(harness.suggester.call_count().await, 0);
    assert_eq!(harness.prompt.choose_count(), 0);
}

#[tokio::test]
async fn test_canonical_file_reprocessed_with_process_all() {
    let harness = TestHarness::new();
    harness.create_file("Heat (1995).mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("Heat", 1995, "tt0113277")])
        .await;

    let mut config = harness.config();
    config.process_all = true;
    let summary = harness.driver(config).run().await.unwrap();

    assert_eq!(
        summary.outcome_for("Heat (1995).mkv"),
        Some(&FileOutcome::AlreadyCorrect)
    );
    assert!(harness.exists("Heat (1995).mkv"));
    assert_eq!(harness.suggester.call_count().await, 1);
    // Confirmed by the top suggestion, never prompted.
    assert_eq!(harness.prompt.choose_count(), 0);
}

#[tokio::test]
async fn test_rename_on_selection() {
    let harness = TestHarness::new();
    harness.create_file("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
    harness
        .suggester
        .queue_candidates(vec![
            candidate("Matrix", 1999, "tt0000001"),
            candidate("The Matrix", 1999, "tt0133093"),
        ])
        .await;
    harness.prompt.queue_choice(Some(1));

    let summary = harness.driver(harness.config()).run().await.unwrap();

    assert_eq!(
        summary.outcome_for("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv"),
        Some(&FileOutcome::Renamed {
            new_name: "The Matrix (1999).mkv".to_string()
        })
    );
    assert!(!harness.exists("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv"));
    assert!(harness.exists("The Matrix (1999).mkv"));

    // The operator saw both formatted candidates, in order.
    let choices = harness.prompt.recorded_choices();
    assert_eq!(choices.len(), 1);
    assert_eq!(
        choices[0].1,
        vec!["Matrix (1999)".to_string(), "The Matrix (1999)".to_string()]
    );
}

#[tokio::test]
async fn test_declined_selection_leaves_file_untouched() {
    let harness = TestHarness::new();
    harness.create_file("Alien.1979.720p.mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("Alien", 1979, "tt0078748")])
        .await;
    harness.prompt.queue_choice(None);

    let summary = harness.driver(harness.config()).run().await.unwrap();

    assert_eq!(
        summary.outcome_for("Alien.1979.720p.mkv"),
        Some(&FileOutcome::Declined)
    );
    assert!(harness.exists("Alien.1979.720p.mkv"));
}

#[tokio::test]
async fn test_suggestion_error_degrades_to_no_match() {
    let harness = TestHarness::new();
    harness.create_file("Alien.1979.720p.mkv");
    harness
        .suggester
        .queue_error(SuggestError::ApiError {
            status: 503,
            message: "unavailable".to_string(),
        })
        .await;

    let summary = harness.driver(harness.config()).run().await.unwrap();

    assert_eq!(
        summary.outcome_for("Alien.1979.720p.mkv"),
        Some(&FileOutcome::NoMatch)
    );
    assert!(harness.exists("Alien.1979.720p.mkv"));
}

#[tokio::test]
async fn test_rename_collision_reports_failure() {
    let harness = TestHarness::new();
    harness.create_file("The.Matrix.1999.mkv");
    harness.create_file("The Matrix (1999).mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("The Matrix", 1999, "tt0133093")])
        .await;
    harness.prompt.queue_choice(Some(0));

    let summary = harness.driver(harness.config()).run().await.unwrap();

    // The canonical twin is skipped, the rename target is occupied.
    assert_eq!(
        summary.outcome_for("The Matrix (1999).mkv"),
        Some(&FileOutcome::Skipped)
    );
    assert!(matches!(
        summary.outcome_for("The.Matrix.1999.mkv"),
        Some(FileOutcome::Failed { .. })
    ));
    assert!(harness.exists("The.Matrix.1999.mkv"));
}

#[tokio::test]
async fn test_original_title_substitution() {
    let harness = TestHarness::new();
    harness.create_file("Amelie.2001.1080p.mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("Amelie", 2001, "tt0211915")])
        .await;
    harness
        .resolver
        .set_language("tt0211915", "French")
        .await;
    harness.prompt.queue_choice(Some(0));

    let mut config = harness.config();
    config.language = Some("french".to_string());
    config.api_key = Some("abcd1234".to_string());

    let summary = harness
        .driver_with_original_titles(config, amelie_db())
        .run()
        .await
        .unwrap();

    assert_eq!(
        summary.outcome_for("Amelie.2001.1080p.mkv"),
        Some(&FileOutcome::Renamed {
            new_name: "Le Fabuleux Destin d'Amelie Poulain (2001).mkv".to_string()
        })
    );
    assert!(harness.exists("Le Fabuleux Destin d'Amelie Poulain (2001).mkv"));
}

#[tokio::test]
async fn test_language_mismatch_keeps_display_title() {
    let harness = TestHarness::new();
    harness.create_file("Amelie.2001.1080p.mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("Amelie", 2001, "tt0211915")])
        .await;
    harness
        .resolver
        .set_language("tt0211915", "French")
        .await;
    harness.prompt.queue_choice(Some(0));

    let mut config = harness.config();
    config.language = Some("de".to_string());
    config.api_key = Some("abcd1234".to_string());

    let summary = harness
        .driver_with_original_titles(config, amelie_db())
        .run()
        .await
        .unwrap();

    assert_eq!(
        summary.outcome_for("Amelie.2001.1080p.mkv"),
        Some(&FileOutcome::Renamed {
            new_name: "Amelie (2001).mkv".to_string()
        })
    );
}

#[tokio::test]
async fn test_resolver_failure_falls_back_to_display_title() {
    let harness = TestHarness::new();
    harness.create_file("Amelie.2001.1080p.mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("Amelie", 2001, "tt0211915")])
        .await;
    harness.resolver.set_failing(true);
    harness.prompt.queue_choice(Some(0));

    let mut config = harness.config();
    config.language = Some("French".to_string());
    config.api_key = Some("abcd1234".to_string());

    let summary = harness
        .driver_with_original_titles(config, amelie_db())
        .run()
        .await
        .unwrap();

    // Language unknown - the suggested title stays.
    assert_eq!(
        summary.outcome_for("Amelie.2001.1080p.mkv"),
        Some(&FileOutcome::Renamed {
            new_name: "Amelie (2001).mkv".to_string()
        })
    );
}

#[tokio::test]
async fn test_missing_database_row_skips_language_lookup() {
    let harness = TestHarness::new();
    harness.create_file("Heat.1995.1080p.mkv");
    harness
        .suggester
        .queue_candidates(vec![candidate("Heat", 1995, "tt0113277")])
        .await;
    harness.prompt.queue_choice(Some(0));

    let mut config = harness.config();
    config.language = Some("French".to_string());
    config.api_key = Some("abcd1234".to_string());

    // Database has no row for Heat.
    let summary = harness
        .driver_with_original_titles(config, amelie_db())
        .run()
        .await
        .unwrap();

    assert_eq!(harness.resolver.call_count().await, 0);
    assert_eq!(
        summary.outcome_for("Heat.1995.1080p.mkv"),
        Some(&FileOutcome::Renamed {
            new_name: "Heat (1995).mkv".to_string()
        })
    );
}

#[tokio::test]
async fn test_mixed_directory_run() {
    let harness = TestHarness::new();
    harness.create_file("Heat (1995).mkv");
    harness.create_file("Se7en.2017.720p.mkv");
    harness.create_file("The.Matrix.1999.1080p.mkv");

    // Sorted iteration order: "Heat (1995).mkv" is skipped and consumes
    // no response; Se7en gets the empty default; The Matrix the queued
    // candidate list.
    harness
        .suggester
        .queue_candidates(vec![])
        .await;
    harness
        .suggester
        .queue_candidates(vec![candidate("The Matrix", 1999, "tt0133093")])
        .await;
    harness.prompt.queue_choice(Some(0));

    let summary = harness.driver(harness.config()).run().await.unwrap();

    assert_eq!(summary.scanned(), 3);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(summary.no_match(), 1);
    assert_eq!(summary.renamed(), 1);
    assert!(harness.exists("The Matrix (1999).mkv"));
}
