//! Startup orchestration.
//!
//! # Responsibilities
//! - Merge the config file with command-line overrides
//! - Validate before anything is built
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Without a config file the form catalog is loaded

use std::path::PathBuf;

use crate::config::validation::{validate_config, ValidationWarning};
use crate::config::{load_config, ConfigError, ConfigResult, MailboxConfig, Preset};

/// Settings gathered from the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub preset: Option<Preset>,
    pub fallback: Option<String>,
    pub log_level: Option<String>,
}

/// Effective configuration plus the catalog warnings found in it.
///
/// Warnings are returned because logging is usually not initialized yet
/// when the configuration is resolved.
#[derive(Debug)]
pub struct Startup {
    pub config: MailboxConfig,
    pub warnings: Vec<ValidationWarning>,
}

/// Produce the effective configuration.
///
/// Command-line values win over file values.
pub fn resolve_config(options: &StartupOptions) -> ConfigResult<Startup> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => MailboxConfig {
            preset: Preset::Form,
            ..MailboxConfig::default()
        },
    };

    if let Some(preset) = options.preset {
        config.preset = preset;
    }
    if let Some(fallback) = &options.fallback {
        config.fallback = Some(fallback.clone());
    }
    if let Some(level) = &options.log_level {
        config.logging.level = level.clone();
    }

    // Overrides can introduce new problems, check again.
    let warnings = validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(Startup { config, warnings })
}
