//! Sample catalog for trying the engine without any configuration.

use crate::mailbox::Mailbox;
use crate::routing::{ConditionId, Message};

/// `(priority, conditions)` for each sample message.
const DEMO_TABLE: [(i64, &[u32]); 5] = [
    (1, &[1]),
    (2, &[2, 9]),
    (3, &[6]),
    (1, &[3, 4]),
    (4, &[1, 5]),
];

/// Sample messages, labelled by their condition path (e.g. `"M[1,5]"`).
pub fn demo_messages() -> Vec<Message> {
    DEMO_TABLE
        .iter()
        .map(|(priority, conditions)| {
            let label = conditions
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            Message::new(
                format!("M[{label}]"),
                *priority,
                conditions.iter().copied().map(ConditionId),
            )
        })
        .collect()
}

impl Mailbox {
    /// Mailbox preloaded with the sample catalog.
    pub fn demo(fallback: Option<&str>) -> Self {
        Self::new(demo_messages(), fallback)
    }
}
