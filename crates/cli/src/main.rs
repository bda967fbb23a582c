mod prompt;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::{
    default_cache_dir, validate_config, OmdbClient, OmdbConfig, RenameDriver, RunConfig,
    SuggestClient, TitleDb,
};

use prompt::InteractivePrompt;

/// Rename movie files to a canonical "Title (Year)" form using remote
/// title suggestions.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// Directory to scan for movie files
    directory: PathBuf,

    /// Keep the original-language title for movies whose primary spoken
    /// language matches this one (requires --key)
    #[arg(short = 'l', long = "langage", value_name = "code")]
    langage: Option<String>,

    /// Metadata API key used for per-title language lookups
    #[arg(short = 'k', long = "key", value_name = "apikey")]
    key: Option<String>,

    /// Iterate through every movie, even those already respecting the
    /// expected format
    #[arg(short = 'a', long = "all")]
    all: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = RunConfig {
        directory: cli.directory,
        process_all: cli.all,
        language: cli.langage,
        api_key: cli.key,
    };

    validate_config(&config)?;

    let prompt = Arc::new(InteractivePrompt::new());
    let suggester =
        Arc::new(SuggestClient::new().context("Failed to create suggestion client")?);

    let mut driver = RenameDriver::new(config.clone(), suggester, prompt.clone());

    if config.wants_original_titles() {
        let resolver = OmdbClient::new(OmdbConfig {
            api_key: config.api_key.clone().unwrap_or_default(),
            base_url: None,
        })
        .context("Failed to create metadata client")?;

        let cache_dir = default_cache_dir().context("Failed to locate the cache directory")?;

        match TitleDb::open(&cache_dir, prompt.as_ref()).await {
            Ok(Some(db)) => {
                info!("Title database ready ({} movies)", db.len());
                driver = driver.with_original_titles(db, Arc::new(resolver));
            }
            Ok(None) => {
                info!("Download declined, nothing to do");
                return Ok(());
            }
            Err(e) => {
                warn!(
                    "Title database unavailable, continuing without original titles: {}",
                    e
                );
            }
        }
    }

    let summary = driver.run().await?;

    info!(
        "Done: {} files scanned, {} renamed, {} already correct, {} without a match, {} skipped",
        summary.scanned(),
        summary.renamed(),
        summary.already_correct(),
        summary.no_match(),
        summary.skipped() + summary.declined(),
    );
    if summary.failed() > 0 {
        warn!("{} renames failed", summary.failed());
    }

    Ok(())
}
