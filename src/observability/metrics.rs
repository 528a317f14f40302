//! Metrics collection.
//!
//! # Metrics
//! - `mailbox_messages_inserted_total` (counter): messages stored in a router
//! - `mailbox_path_conflicts_total` (counter): inserts that replaced a message
//! - `mailbox_resolutions_total` (counter): queries by `outcome`
//!   (`matched` or `fallback`)
//!
//! # Design Decisions
//! - Only the `metrics` facade is used here; the host installs a recorder
//! - Without a recorder every call is a no-op

use metrics::counter;

pub const MESSAGES_INSERTED: &str = "mailbox_messages_inserted_total";
pub const PATH_CONFLICTS: &str = "mailbox_path_conflicts_total";
pub const RESOLUTIONS: &str = "mailbox_resolutions_total";

pub fn record_insert() {
    counter!(MESSAGES_INSERTED).increment(1);
}

pub fn record_conflict() {
    counter!(PATH_CONFLICTS).increment(1);
}

/// Record one `best_match` call.
pub fn record_resolution(matched: bool) {
    let outcome = if matched { "matched" } else { "fallback" };
    counter!(RESOLUTIONS, "outcome" => outcome).increment(1);
}
