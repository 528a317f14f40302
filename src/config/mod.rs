//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks, conflict warnings)
//!     → MailboxConfig (validated)
//!     → MailboxConfig::build() → Mailbox
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Catalog conflicts are reported, never fatal

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError, ConfigResult};
pub use schema::{LoggingConfig, MailboxConfig, MessageConfig, Preset};
