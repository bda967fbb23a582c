mod types;
mod validate;

pub use types::*;
pub use validate::validate_config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("--langage requires a metadata API key (--key)")]
    MissingApiKey,
}
