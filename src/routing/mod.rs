//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Catalog build:
//!     Message { text, priority, conditions }
//!     → router.rs (walk/create one node per condition)
//!     → message stored as the terminal of the last node
//!
//! Query:
//!     ActiveConditions (caller order, de-duplicated)
//!     → router.rs (depth-first, full active set offered at every node)
//!     → Return: best Message or None
//! ```
//!
//! # Design Decisions
//! - Router is built once, then only read
//! - Matching is subset based: condition order only shapes the tree
//! - Highest priority wins; ties go to the later-explored candidate
//! - Explicit None on no match; the fallback lives one layer up

pub mod condition;
pub mod message;
pub mod router;

pub use condition::{ActiveConditions, ConditionId};
pub use message::Message;
pub use router::Router;
