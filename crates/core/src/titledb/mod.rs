//! Reference database of title records.
//!
//! A flattened, locally cached projection of the bulk title dataset, used
//! only when the original-title feature is requested. Loaded fully into
//! memory behind a hash index; read-only for the rest of the run.

mod store;
mod types;

pub use store::{default_cache_dir, TitleDb, DATASET_URL};
pub use types::TitleRecord;

use thiserror::Error;

/// Errors that can occur while loading or building the reference database.
#[derive(Debug, Error)]
pub enum TitleDbError {
    /// Download request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Dataset host answered with a non-success status.
    #[error("Dataset download failed with status {status}")]
    DownloadFailed { status: u16 },

    /// Reading or writing dataset files failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing the dataset or the cache table failed.
    #[error("Failed to parse dataset: {0}")]
    ParseError(#[from] csv::Error),

    /// The cache location could not be determined.
    #[error("Cannot determine cache location: {0}")]
    NoCacheLocation(String),
}
