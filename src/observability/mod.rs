//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / mailbox / config produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stderr (fmt layer)
//!     → whatever metrics recorder the host installs
//! ```

pub mod logging;
pub mod metrics;
