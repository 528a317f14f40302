//! Shared helpers for integration tests.

use mailbox::{ActiveConditions, ConditionId, Message};

#[allow(dead_code)]
pub fn msg(text: &str, priority: i64, conditions: &[u32]) -> Message {
    Message::new(text, priority, conditions.iter().copied().map(ConditionId))
}

#[allow(dead_code)]
pub fn active(ids: &[u32]) -> ActiveConditions {
    ActiveConditions::from_ids(ids.iter().copied())
}

/// Brute-force resolution: the highest priority among eligible messages,
/// ignoring tie-break order. Later inserts on an identical path shadow
/// earlier ones, as in the router.
#[allow(dead_code)]
pub fn reference_best_priority(messages: &[Message], active: &ActiveConditions) -> Option<i64> {
    messages
        .iter()
        .enumerate()
        .filter(|(i, m)| {
            !messages[i + 1..]
                .iter()
                .any(|later| later.conditions() == m.conditions())
        })
        .map(|(_, m)| m)
        .filter(|m| m.is_eligible(active))
        .map(Message::priority)
        .max()
}

/// Messages that survive path conflicts (last insert per path).
#[allow(dead_code)]
pub fn surviving(messages: &[Message]) -> Vec<&Message> {
    messages
        .iter()
        .enumerate()
        .filter(|(i, m)| {
            !messages[i + 1..]
                .iter()
                .any(|later| later.conditions() == m.conditions())
        })
        .map(|(_, m)| m)
        .collect()
}
