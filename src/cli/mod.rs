//! Interactive front end.
//!
//! # Data Flow
//! ```text
//! stdin → input.rs (reader thread → channel)
//!     → session.rs (prompt loop, Round until negative)
//!     → Mailbox::best_match → prompt.rs (render) → stdout
//! ```
//!
//! # Design Decisions
//! - Reads never block the runtime, so SIGINT ends the session at once

pub mod input;
pub mod prompt;
pub mod session;

pub use input::spawn_line_reader;
pub use prompt::{parse_entry, render_choice, Entry, PromptError, Round};
pub use session::{run, Exit, SessionOptions};
