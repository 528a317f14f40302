//! Condition identifiers and the active-condition sequence.
//!
//! # Design Decisions
//! - `ConditionId` is an opaque integer; the engine attaches no meaning to it
//! - `ActiveConditions` keeps the caller's order (first occurrence wins on
//!   duplicates) so tie-breaking during resolution is deterministic

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one triggering condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(pub u32);

impl From<u32> for ConditionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ConditionId> for u32 {
    fn from(id: ConditionId) -> Self {
        id.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The conditions known to be true at query time.
///
/// Iteration order is the order the caller supplied them in. Repeated ids
/// are dropped on construction since matching is subset based, so
/// equal-priority ties follow each id's first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveConditions {
    ids: Vec<ConditionId>,
}

impl ActiveConditions {
    /// An empty active set. Only unconditional messages match it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw integer ids.
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        ids.into_iter().map(ConditionId::from).collect()
    }

    /// Append a condition unless it is already present.
    pub fn push(&mut self, id: ConditionId) {
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: ConditionId) -> bool {
        self.ids.contains(&id)
    }

    /// True when every id in `required` is active.
    pub fn satisfies(&self, required: &[ConditionId]) -> bool {
        required.iter().all(|id| self.contains(*id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionId> + '_ {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[ConditionId] {
        &self.ids
    }
}

impl FromIterator<ConditionId> for ActiveConditions {
    fn from_iter<I: IntoIterator<Item = ConditionId>>(iter: I) -> Self {
        let mut active = Self::new();
        for id in iter {
            active.push(id);
        }
        active
    }
}

impl Extend<ConditionId> for ActiveConditions {
    fn extend<I: IntoIterator<Item = ConditionId>>(&mut self, iter: I) {
        for id in iter {
            self.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_keep_first_position() {
        let active = ActiveConditions::from_ids([3, 1, 3, 2, 1]);
        assert_eq!(
            active.as_slice(),
            &[ConditionId(3), ConditionId(1), ConditionId(2)]
        );
    }

    #[test]
    fn test_satisfies_is_subset_check() {
        let active = ActiveConditions::from_ids([1, 5, 7]);
        assert!(active.satisfies(&[]));
        assert!(active.satisfies(&[ConditionId(5), ConditionId(1)]));
        assert!(!active.satisfies(&[ConditionId(1), ConditionId(2)]));
        assert!(ActiveConditions::new().satisfies(&[]));
    }

    #[test]
    fn test_condition_id_conversion() {
        let id = ConditionId::from(9u32);
        assert_eq!(u32::from(id), 9);
        assert_eq!(id.to_string(), "9");
    }
}
