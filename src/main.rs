//! Mailbox message processor.
//!
//! Interactive front end for the message router.
//!
//! # Architecture Overview
//!
//! ```text
//!   stdin ──▶ cli::input ──▶ cli::session ──▶ Mailbox::best_match ──▶ stdout
//!                                                   │
//!                                                   ▼
//!                                     routing::Router (condition tree)
//!
//!   config file / flags ──▶ lifecycle::startup ──▶ MailboxConfig::build
//!   SIGINT / SIGTERM    ──▶ lifecycle::signals ──▶ Shutdown
//! ```

use std::path::PathBuf;

use clap::Parser;

use mailbox::cli::{session, spawn_line_reader, SessionOptions};
use mailbox::config::Preset;
use mailbox::lifecycle::{resolve_config, signals, Shutdown, Startup, StartupOptions};
use mailbox::observability::logging;
use mailbox::FormCondition;

#[derive(Parser)]
#[command(name = "mailbox")]
#[command(about = "Pick the best message for a set of active conditions", long_about = None)]
struct Cli {
    /// TOML catalog file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in catalog: form, demo or none.
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Text shown when no message matches.
    #[arg(short, long)]
    fallback: Option<String>,

    /// Print the chosen message as JSON.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// List the form condition ids and exit.
    #[arg(long)]
    list_conditions: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list_conditions {
        for condition in FormCondition::ALL {
            println!("{:>2}  {}", condition.id().0, condition);
        }
        return Ok(());
    }

    let options = StartupOptions {
        config_path: cli.config,
        preset: cli.preset,
        fallback: cli.fallback,
        log_level: cli.log_level,
    };
    let Startup { config, warnings } = resolve_config(&options)?;
    logging::init(&config.logging.level);
    for warning in &warnings {
        tracing::warn!(%warning, "Catalog conflict");
    }

    let mailbox = config.build();
    tracing::info!(
        messages = mailbox.len(),
        preset = %config.preset,
        "Mailbox ready"
    );

    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    let mut lines = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;
    let mut stdout = std::io::stdout();
    let exit = session::run(
        &mailbox,
        &mut lines,
        &shutdown,
        &mut stdout,
        SessionOptions { json: cli.json },
    )
    .await?;

    tracing::debug!(?exit, "Front end stopped");
    Ok(())
}
