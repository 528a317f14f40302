//! Catalog message definition.

use serde::{Deserialize, Serialize};

use crate::routing::condition::{ActiveConditions, ConditionId};

/// A message the router can select.
///
/// Immutable once built. The router reads the condition path through a
/// shared slice and never alters it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    text: String,
    priority: i64,
    conditions: Vec<ConditionId>,
}

impl Message {
    /// Create a message requiring every condition in `conditions`.
    ///
    /// An empty condition list makes the message unconditional.
    pub fn new(
        text: impl Into<String>,
        priority: i64,
        conditions: impl IntoIterator<Item = ConditionId>,
    ) -> Self {
        Self {
            text: text.into(),
            priority,
            conditions: conditions.into_iter().collect(),
        }
    }

    /// Create an unconditional message.
    pub fn unconditional(text: impl Into<String>, priority: i64) -> Self {
        Self::new(text, priority, [])
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Higher is more important.
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// Required conditions in insertion-path order.
    pub fn conditions(&self) -> &[ConditionId] {
        &self.conditions
    }

    pub fn is_unconditional(&self) -> bool {
        self.conditions.is_empty()
    }

    /// True when all required conditions are in `active`.
    pub fn is_eligible(&self, active: &ActiveConditions) -> bool {
        active.satisfies(&self.conditions)
    }
}
