//! Condition-indexed message selection.
//!
//! Given the conditions that are true right now, pick the highest-priority
//! catalog message whose required conditions are all satisfied, or a
//! fallback when none is.

pub mod cli;
pub mod config;
pub mod lifecycle;
pub mod mailbox;
pub mod observability;
pub mod routing;

pub use config::schema::MailboxConfig;
pub use lifecycle::Shutdown;
pub use mailbox::{FormCondition, Mailbox, DEFAULT_FALLBACK};
pub use routing::{ActiveConditions, ConditionId, Message, Router};
