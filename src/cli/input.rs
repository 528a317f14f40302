//! Line input read on a dedicated thread.
//!
//! # Design Decisions
//! - Blocking reads run on a plain `std::thread`, not the runtime's blocking
//!   pool, so an interrupted front end can return while a read is pending
//! - The thread stops after EOF, a read error, or once the receiver is gone

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

const LINE_BUFFER: usize = 16;

/// Spawn a reader thread and hand back the receiving end of its lines.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<io::Result<String>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.blocking_send(line).is_err() || failed {
                    break;
                }
            }
            tracing::debug!("Line reader finished");
        })?;

    Ok(rx)
}
