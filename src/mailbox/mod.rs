//! Mailbox: the catalog facade client code talks to.
//!
//! # Data Flow
//! ```text
//! Vec<Message> (+ optional fallback text)
//!     → Mailbox::new (insert each into the owned Router)
//!
//! best_match(active)
//!     → Router::resolve
//!     → Some(message) | fallback
//! ```
//!
//! # Design Decisions
//! - One fallback, owned here, applied once after resolution
//! - `best_match` never returns "nothing"
//! - Preloaded catalogs (`form`, `demo`) are plain data in their own files

pub mod demo;
pub mod form;

use tracing::{debug, trace};

use crate::observability::metrics;
use crate::routing::{ActiveConditions, Message, Router};

pub use form::FormCondition;

/// Fallback text used when the caller supplies none.
pub const DEFAULT_FALLBACK: &str = "No matching condition found";

/// Owns a router and the message returned when nothing matches.
#[derive(Debug, Clone)]
pub struct Mailbox {
    router: Router,
    fallback: Message,
}

impl Mailbox {
    /// Build a mailbox from `messages`.
    ///
    /// The fallback gets priority 0 and no conditions.
    pub fn new<I>(messages: I, fallback: Option<&str>) -> Self
    where
        I: IntoIterator<Item = Message>,
    {
        let fallback = Message::unconditional(fallback.unwrap_or(DEFAULT_FALLBACK), 0);
        let mut mailbox = Self {
            router: Router::new(),
            fallback,
        };
        mailbox.add_messages(messages);

        debug!(
            messages = mailbox.router.len(),
            depth = mailbox.router.depth(),
            fallback = %mailbox.fallback.text(),
            "mailbox created"
        );
        mailbox
    }

    /// A mailbox with no messages; every query yields the fallback.
    pub fn empty(fallback: Option<&str>) -> Self {
        Self::new(std::iter::empty(), fallback)
    }

    pub fn add_message(&mut self, message: Message) {
        self.router.insert(message);
    }

    pub fn add_messages<I>(&mut self, messages: I)
    where
        I: IntoIterator<Item = Message>,
    {
        for message in messages {
            self.add_message(message);
        }
    }

    /// Best message for `active`, or the fallback.
    pub fn best_match(&self, active: &ActiveConditions) -> &Message {
        match self.router.resolve(active) {
            Some(message) => {
                metrics::record_resolution(true);
                trace!(
                    active = ?active.as_slice(),
                    text = %message.text(),
                    priority = message.priority(),
                    "message matched"
                );
                message
            }
            None => {
                metrics::record_resolution(false);
                trace!(active = ?active.as_slice(), "no message matched, using fallback");
                &self.fallback
            }
        }
    }

    /// Same as `best_match` but without the fallback substitution.
    pub fn find(&self, active: &ActiveConditions) -> Option<&Message> {
        self.router.resolve(active)
    }

    pub fn fallback(&self) -> &Message {
        &self.fallback
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Number of stored messages (the fallback is not counted).
    pub fn len(&self) -> usize {
        self.router.len()
    }

    pub fn is_empty(&self) -> bool {
        self.router.is_empty()
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::empty(None)
    }
}

impl Extend<Message> for Mailbox {
    fn extend<I: IntoIterator<Item = Message>>(&mut self, iter: I) {
        self.add_messages(iter);
    }
}
