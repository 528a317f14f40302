//! The interactive prompt loop.

use std::io::{self, Write};

use tokio::sync::mpsc;

use crate::cli::prompt::{render_choice, Round};
use crate::lifecycle::Shutdown;
use crate::mailbox::Mailbox;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// Input closed.
    Eof,
    /// Shutdown was triggered while waiting for input.
    Interrupted,
}

enum Line {
    Input(String),
    Closed,
    Interrupted,
}

/// Prompt loop settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Print chosen messages as JSON.
    pub json: bool,
}

/// Run rounds until input closes or shutdown is triggered.
///
/// Each round collects condition ids until a negative number, then writes
/// the best message for them.
pub async fn run<W: Write>(
    mailbox: &Mailbox,
    lines: &mut mpsc::Receiver<io::Result<String>>,
    shutdown: &Shutdown,
    out: &mut W,
    options: SessionOptions,
) -> io::Result<Exit> {
    writeln!(out, "Mailbox Message Processor")?;
    writeln!(out, "========================")?;

    let exit = loop {
        writeln!(out, "Enter numbers (negative number to stop):")?;
        let mut round = Round::new();

        let closed_by = loop {
            write!(out, "Enter a number: ")?;
            out.flush()?;

            match next_line(lines, shutdown).await? {
                Line::Input(line) => match round.push_line(&line) {
                    Ok(true) => break None,
                    Ok(false) => {}
                    Err(e) => writeln!(out, "{e}")?,
                },
                Line::Closed => break Some(Exit::Eof),
                Line::Interrupted => break Some(Exit::Interrupted),
            }
        };

        if let Some(exit) = closed_by {
            break exit;
        }

        writeln!(out, "Processing...")?;
        if round.is_empty() {
            writeln!(out, "No numbers were entered.")?;
        } else {
            let chosen = mailbox.best_match(&round.into_active());
            writeln!(out, "{}", render_choice(chosen, options.json)?)?;
        }
        writeln!(out, "\n{}\n", "=".repeat(40))?;
    };

    if exit == Exit::Interrupted {
        writeln!(out, "\n\nGoodbye!")?;
    }
    out.flush()?;
    Ok(exit)
}

async fn next_line(
    lines: &mut mpsc::Receiver<io::Result<String>>,
    shutdown: &Shutdown,
) -> io::Result<Line> {
    tokio::select! {
        line = lines.recv() => match line {
            Some(line) => Ok(Line::Input(line?)),
            None => Ok(Line::Closed),
        },
        _ = shutdown.wait() => Ok(Line::Interrupted),
    }
}
