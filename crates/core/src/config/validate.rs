use super::{types::RunConfig, ConfigError};

/// Validate a run configuration.
/// Currently validates:
/// - The target directory exists
/// - A language preference is only set together with an API key
pub fn validate_config(config: &RunConfig) -> Result<(), ConfigError> {
    if !config.directory.exists() {
        return Err(ConfigError::DirectoryNotFound(
            config.directory.display().to_string(),
        ));
    }

    if config.language.is_some() && config.api_key.is_none() {
        return Err(ConfigError::MissingApiKey);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_valid_config() {
        let temp = TempDir::new().unwrap();
        let config = RunConfig::new(temp.path());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_missing_directory_fails() {
        let config = RunConfig::new("/definitely/not/a/real/path");
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::DirectoryNotFound(_))));
    }

    #[test]
    fn test_validate_language_without_key_fails() {
        let temp = TempDir::new().unwrap();
        let mut config = RunConfig::new(temp.path());
        config.language = Some("fr".to_string());
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_validate_language_with_key_ok() {
        let temp = TempDir::new().unwrap();
        let mut config = RunConfig::new(temp.path());
        config.language = Some("fr".to_string());
        config.api_key = Some("abcd1234".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
