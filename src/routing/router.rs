//! Condition-indexed message lookup.
//!
//! # Responsibilities
//! - Store messages in a tree keyed by condition id
//! - Resolve the highest-priority message whose conditions are all active
//! - Return an explicit no-match (`None`) rather than a silent default
//!
//! # Design Decisions
//! - Each node owns its children; no back-references
//! - Every recursive step re-offers the full active set, so a message is
//!   reachable exactly when all conditions on its path are active
//! - Ties on priority go to the candidate explored last

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::observability::metrics;
use crate::routing::condition::{ActiveConditions, ConditionId};
use crate::routing::message::Message;

/// One node of the condition tree. The root node is the router itself.
#[derive(Debug, Clone, Default)]
pub struct Router {
    terminal: Option<Message>,
    children: HashMap<ConditionId, Router>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a message at the path spelled by its condition list.
    ///
    /// Missing nodes are created along the way. A message already stored at
    /// the same path is replaced and returned.
    pub fn insert(&mut self, message: Message) -> Option<Message> {
        let mut node = self;
        for id in message.conditions() {
            node = node.children.entry(*id).or_default();
        }

        metrics::record_insert();
        debug!(
            text = %message.text(),
            priority = message.priority(),
            conditions = ?message.conditions(),
            "message inserted"
        );

        let replaced = node.terminal.replace(message);
        if let Some(old) = &replaced {
            metrics::record_conflict();
            warn!(
                replaced = %old.text(),
                replaced_priority = old.priority(),
                conditions = ?old.conditions(),
                "condition path already had a message, keeping the later one"
            );
        }
        replaced
    }

    /// Find the best message whose conditions are all in `active`.
    pub fn resolve(&self, active: &ActiveConditions) -> Option<&Message> {
        let mut best = self.terminal.as_ref();

        for id in active.iter() {
            let Some(child) = self.children.get(id) else {
                continue;
            };
            let Some(candidate) = child.resolve(active) else {
                continue;
            };

            match best {
                Some(current) if candidate.priority() < current.priority() => {}
                _ => best = Some(candidate),
            }
        }

        best
    }

    /// Message stored exactly at this node.
    pub fn terminal(&self) -> Option<&Message> {
        self.terminal.as_ref()
    }

    /// Follow one edge.
    pub fn child(&self, id: ConditionId) -> Option<&Router> {
        self.children.get(&id)
    }

    /// Follow a full path from this node.
    pub fn descend(&self, path: &[ConditionId]) -> Option<&Router> {
        path.iter().try_fold(self, |node, id| node.child(*id))
    }

    /// Number of stored messages.
    pub fn len(&self) -> usize {
        self.messages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.terminal.is_none() && self.children.values().all(Router::is_empty)
    }

    /// Number of nodes, this one included.
    pub fn node_count(&self) -> usize {
        1 + self.children.values().map(Router::node_count).sum::<usize>()
    }

    /// Longest edge count from this node to a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.depth())
            .max()
            .unwrap_or(0)
    }

    /// All stored messages, in no particular order.
    pub fn messages(&self) -> Messages<'_> {
        Messages { stack: vec![self] }
    }
}

/// Iterator over every terminal below a node.
pub struct Messages<'a> {
    stack: Vec<&'a Router>,
}

impl<'a> Iterator for Messages<'a> {
    type Item = &'a Message;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            self.stack.extend(node.children.values());
            if let Some(message) = node.terminal.as_ref() {
                return Some(message);
            }
        }
        None
    }
}
