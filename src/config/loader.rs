//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::MailboxConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Parse and validate configuration from a TOML string.
///
/// Only errors are checked here. Catalog warnings are left to whoever
/// calls `validate_config` on the final configuration.
pub fn parse_config(content: &str) -> ConfigResult<MailboxConfig> {
    let config: MailboxConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> ConfigResult<MailboxConfig> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    tracing::info!(
        path = %path.display(),
        preset = %config.preset,
        messages = config.messages.len(),
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = parse_config("messages = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = parse_config(
            r#"
            [logging]
            level = "chatty"

            [[messages]]
            text = ""
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: unknown log level 'chatty', message #0 has no text"
        );
    }

    #[test]
    fn test_conflicts_are_not_errors() {
        let config = parse_config(
            r#"
            [[messages]]
            text = "first"
            conditions = [2, 9]

            [[messages]]
            text = "second"
            conditions = [2, 9]
            "#,
        )
        .unwrap();
        assert_eq!(config.messages.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/mailbox.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
