use std::path::PathBuf;

/// Options for a single rename run.
///
/// Built once from the command line and passed explicitly to the
/// components that need it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory whose files are scanned and renamed in place.
    pub directory: PathBuf,
    /// Process every file, even those already in canonical form.
    pub process_all: bool,
    /// Keep the original title for candidates whose primary spoken
    /// language matches this one.
    pub language: Option<String>,
    /// Metadata API key used for per-title language lookups.
    pub api_key: Option<String>,
}

impl RunConfig {
    /// Create a config for a plain run over `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            process_all: false,
            language: None,
            api_key: None,
        }
    }

    /// Whether the original-title feature is active for this run.
    pub fn wants_original_titles(&self) -> bool {
        self.language.is_some()
    }
}
