//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Detect conflicting catalog entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Conflicts are warnings: the router keeps the later message
//! - Validation is a pure function of the config

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::config::schema::MailboxConfig;
use crate::observability::logging;
use crate::routing::ConditionId;

/// Problems that make a configuration unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message #{index} has no text")]
    EmptyText { index: usize },

    #[error("fallback text is empty")]
    EmptyFallback,

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Accepted but suspicious catalog entries.
///
/// Indexes count preset messages first, then the file's `[[messages]]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("message #{later} replaces message #{earlier} on condition path {path:?}")]
    DuplicatePath {
        earlier: usize,
        later: usize,
        path: Vec<ConditionId>,
    },

    #[error("message #{index} lists condition {condition} more than once")]
    RepeatedCondition { index: usize, condition: ConditionId },

    #[error("messages #{earlier} and #{later} require the same conditions in another order")]
    EquivalentConditions { earlier: usize, later: usize },

    #[error("message #{index} text is only whitespace")]
    BlankText { index: usize },
}

/// Validate a configuration.
///
/// On success returns the warnings found; on failure every error.
pub fn validate_config(
    config: &MailboxConfig,
) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.fallback.as_deref().is_some_and(|text| text.trim().is_empty()) {
        errors.push(ValidationError::EmptyFallback);
    }
    if !logging::is_valid_level(&config.logging.level) {
        errors.push(ValidationError::UnknownLogLevel(config.logging.level.clone()));
    }

    let messages = config.all_messages();
    let offset = messages.len() - config.messages.len();
    for (index, entry) in config.messages.iter().enumerate() {
        if entry.text.is_empty() {
            errors.push(ValidationError::EmptyText {
                index: offset + index,
            });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let mut warnings: Vec<ValidationWarning> = config
        .messages
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.text.trim().is_empty())
        .map(|(index, _)| ValidationWarning::BlankText {
            index: offset + index,
        })
        .collect();
    let mut by_path: HashMap<&[ConditionId], usize> = HashMap::new();
    let mut by_set: HashMap<BTreeSet<ConditionId>, usize> = HashMap::new();

    for (index, message) in messages.iter().enumerate() {
        let path = message.conditions();

        let mut seen = BTreeSet::new();
        for condition in path {
            if !seen.insert(*condition) {
                warnings.push(ValidationWarning::RepeatedCondition {
                    index,
                    condition: *condition,
                });
            }
        }

        if let Some(earlier) = by_path.insert(path, index) {
            warnings.push(ValidationWarning::DuplicatePath {
                earlier,
                later: index,
                path: path.to_vec(),
            });
        } else if let Some(&earlier) = by_set.get(&seen) {
            warnings.push(ValidationWarning::EquivalentConditions {
                earlier,
                later: index,
            });
        }
        by_set.insert(seen, index);
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{MessageConfig, Preset};

    fn entry(text: &str, priority: i64, conditions: &[u32]) -> MessageConfig {
        MessageConfig {
            text: text.to_string(),
            priority,
            conditions: conditions.to_vec(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&MailboxConfig::default()), Ok(Vec::new()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = MailboxConfig::default();
        config.fallback = Some("  ".to_string());
        config.logging.level = "loud".to_string();
        config.messages = vec![entry("ok", 1, &[1]), entry("", 1, &[2])];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyFallback,
                ValidationError::UnknownLogLevel("loud".to_string()),
                ValidationError::EmptyText { index: 1 },
            ]
        );
    }

    #[test]
    fn test_duplicate_path_warning() {
        let mut config = MailboxConfig::default();
        config.messages = vec![entry("a", 2, &[2, 9]), entry("b", 7, &[2, 9])];

        let warnings = validate_config(&config).unwrap();
        assert_eq!(
            warnings,
            vec![ValidationWarning::DuplicatePath {
                earlier: 0,
                later: 1,
                path: vec![ConditionId(2), ConditionId(9)],
            }]
        );
    }

    #[test]
    fn test_reordered_conditions_warning() {
        let mut config = MailboxConfig::default();
        config.messages = vec![entry("a", 1, &[1, 5]), entry("b", 1, &[5, 1])];

        let warnings = validate_config(&config).unwrap();
        assert_eq!(
            warnings,
            vec![ValidationWarning::EquivalentConditions { earlier: 0, later: 1 }]
        );
    }

    #[test]
    fn test_repeated_condition_warning() {
        let mut config = MailboxConfig::default();
        config.messages = vec![entry("a", 1, &[3, 3])];

        let warnings = validate_config(&config).unwrap();
        assert_eq!(
            warnings,
            vec![ValidationWarning::RepeatedCondition {
                index: 0,
                condition: ConditionId(3),
            }]
        );
    }

    #[test]
    fn test_override_of_preset_is_reported() {
        let mut config = MailboxConfig::default();
        config.preset = Preset::Form;
        config.messages = vec![entry("Blocked", 4, &[5])];

        let warnings = validate_config(&config).unwrap();
        assert_eq!(
            warnings,
            vec![ValidationWarning::DuplicatePath {
                earlier: 4,
                later: 11,
                path: vec![ConditionId(5)],
            }]
        );
    }

    #[test]
    fn test_empty_text_index_counts_preset() {
        let mut config = MailboxConfig::default();
        config.preset = Preset::Demo;
        config.messages = vec![entry("", 1, &[])];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::EmptyText { index: 5 }]);
    }

    #[test]
    fn test_whitespace_text_is_only_a_warning() {
        let mut config = MailboxConfig::default();
        config.messages = vec![entry("ok", 1, &[1]), entry("  ", 2, &[2])];

        let warnings = validate_config(&config).unwrap();
        assert_eq!(warnings, vec![ValidationWarning::BlankText { index: 1 }]);
        assert_eq!(config.build().len(), 2);
    }
}
