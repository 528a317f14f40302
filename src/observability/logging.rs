//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured events
//! - `RUST_LOG` overrides the configured level
//! - Logs go to stderr; stdout carries the chosen messages only

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Levels accepted in configuration files and on the command line.
pub const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn is_valid_level(level: &str) -> bool {
    LEVELS.contains(&level.to_ascii_lowercase().as_str())
}

/// Default filter directive for a level, scoped to this crate.
pub fn default_directive(level: &str) -> String {
    format!("mailbox={}", level.to_ascii_lowercase())
}

/// Install the global subscriber.
///
/// Calling it twice is harmless; the second subscriber is ignored.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_validation() {
        assert!(is_valid_level("info"));
        assert!(is_valid_level("WARN"));
        assert!(!is_valid_level("verbose"));
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive("Debug"), "mailbox=debug");
    }
}
