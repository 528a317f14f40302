//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mailbox::{demo, form, Mailbox};
use crate::routing::{ConditionId, Message};

/// Root configuration for a mailbox.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MailboxConfig {
    /// Text returned when no message matches. `None` uses the built-in text.
    pub fallback: Option<String>,

    /// Built-in catalog inserted before `messages`.
    pub preset: Preset,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Catalog entries, inserted in file order.
    pub messages: Vec<MessageConfig>,
}

impl MailboxConfig {
    /// Every message the mailbox will hold, preset first.
    pub fn all_messages(&self) -> Vec<Message> {
        let mut messages = self.preset.messages();
        messages.extend(self.messages.iter().map(MessageConfig::to_message));
        messages
    }

    /// Build the mailbox this configuration describes.
    pub fn build(&self) -> Mailbox {
        Mailbox::new(self.all_messages(), self.fallback.as_deref())
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageConfig {
    /// Text handed back to the caller.
    pub text: String,

    /// Higher wins (default: 0).
    #[serde(default)]
    pub priority: i64,

    /// Conditions that must all be active. Empty means always eligible.
    #[serde(default)]
    pub conditions: Vec<u32>,
}

impl MessageConfig {
    pub fn to_message(&self) -> Message {
        Message::new(
            self.text.clone(),
            self.priority,
            self.conditions.iter().copied().map(ConditionId),
        )
    }
}

/// Built-in catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Authentication and account form messages.
    Form,
    /// Five-message sample catalog.
    Demo,
    /// No built-in messages.
    #[default]
    None,
}

impl Preset {
    pub fn messages(self) -> Vec<Message> {
        match self {
            Preset::Form => form::form_messages(),
            Preset::Demo => demo::demo_messages(),
            Preset::None => Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown preset '{0}' (expected form, demo or none)")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "form" => Ok(Preset::Form),
            "demo" => Ok(Preset::Demo),
            "none" => Ok(Preset::None),
            _ => Err(UnknownPreset(s.to_string())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Form => "form",
            Preset::Demo => "demo",
            Preset::None => "none",
        };
        f.write_str(name)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::ActiveConditions;

    #[test]
    fn test_defaults() {
        let config = MailboxConfig::default();
        assert_eq!(config.preset, Preset::None);
        assert_eq!(config.logging.level, "info");
        assert!(config.fallback.is_none());
        assert!(config.messages.is_empty());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: MailboxConfig = toml::from_str(
            r#"
            fallback = "nothing"

            [[messages]]
            text = "IP address blocked"
            priority = 4
            conditions = [5]

            [[messages]]
            text = "always"
            "#,
        )
        .unwrap();

        assert_eq!(config.fallback.as_deref(), Some("nothing"));
        assert_eq!(config.messages.len(), 2);
        assert_eq!(config.messages[1].priority, 0);
        assert!(config.messages[1].conditions.is_empty());
    }

    #[test]
    fn test_build_puts_explicit_messages_after_preset() {
        let config: MailboxConfig = toml::from_str(
            r#"
            preset = "form"

            [[messages]]
            text = "Blocked, contact support"
            priority = 4
            conditions = [5]
            "#,
        )
        .unwrap();

        let mailbox = config.build();
        assert_eq!(mailbox.len(), 11);
        assert_eq!(
            mailbox.best_match(&ActiveConditions::from_ids([5])).text(),
            "Blocked, contact support"
        );
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("Form".parse::<Preset>().unwrap(), Preset::Form);
        assert_eq!("none".parse::<Preset>().unwrap(), Preset::None);
        assert!("legacy".parse::<Preset>().is_err());
        assert_eq!(Preset::Demo.to_string(), "demo");
    }
}
