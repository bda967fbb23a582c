pub mod config;
pub mod language;
pub mod normalizer;
pub mod prompt;
pub mod renamer;
pub mod suggest;
pub mod testing;
pub mod titledb;

pub use config::{validate_config, ConfigError, RunConfig};
pub use language::{LanguageError, LanguageResolver, OmdbClient, OmdbConfig};
pub use prompt::Prompt;
pub use renamer::{FileOutcome, FileReport, RenameDriver, RenamerError, RunSummary};
pub use suggest::{Candidate, SuggestClient, SuggestError, TitleSuggester};
pub use titledb::{default_cache_dir, TitleDb, TitleDbError, TitleRecord};
