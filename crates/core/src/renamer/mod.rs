//! The rename driver - iterates a directory and applies the full
//! normalize/suggest/enrich/prompt/rename pipeline to each file.

mod driver;
mod types;

pub use driver::RenameDriver;
pub use types::{FileOutcome, FileReport, RunSummary};

use thiserror::Error;

/// Errors that abort a rename run outright.
///
/// Everything that goes wrong for a single file degrades to a
/// [`FileOutcome`] instead; only failing to list the directory is fatal.
#[derive(Debug, Error)]
pub enum RenamerError {
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: String,
        source: std::io::Error,
    },
}
