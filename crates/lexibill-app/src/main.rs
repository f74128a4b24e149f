//! LexiBill application binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Install tracing (stderr)
//! 3. Open the entry store (SQLite, or in-memory)
//! 4. Run the intake conversation over stdin/stdout until EOF, `quit` or `exit`

mod cli;
mod terminal;

use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use lexibill_core::config::LexiBillConfig;
use lexibill_core::ports::EntryStore;
use lexibill_intake::{IntakeEngine, IntakeError};
use lexibill_storage::{Database, MemoryEntryStore, SqliteEntryStore};

use crate::cli::CliArgs;
use crate::terminal::{StdoutSink, TerminalPresenter};

fn open_store(
    config: &LexiBillConfig,
    args: &CliArgs,
) -> Result<Arc<dyn EntryStore>, Box<dyn std::error::Error>> {
    if args.in_memory || config.storage.in_memory {
        tracing::info!("Using in-memory entry store; entries are discarded on exit");
        return Ok(Arc::new(MemoryEntryStore::new()));
    }

    let data_dir = args.resolve_data_dir(&config.general.data_dir);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }

    let db_path = data_dir.join(&config.storage.database_file);
    let db = Database::new(&db_path)?;
    tracing::info!(path = %db_path.display(), "SQLite entry store opened");
    Ok(Arc::new(SqliteEntryStore::new(Arc::new(db))))
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "quit" | "exit")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let config = LexiBillConfig::load_or_default(&config_file);

    // Tracing: RUST_LOG wins over --log-level and the config file.
    let level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting LexiBill v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Storage.
    let store = open_store(&config, &args)?;

    // Engine.
    let sink = Arc::new(StdoutSink::new(&config.intake.bot_name));
    let mut engine = IntakeEngine::from_config(&config.intake, store, Arc::new(TerminalPresenter))
        .with_sink(sink);
    if let Some(today) = args.today {
        tracing::info!(%today, "Using fixed date for relative phrases");
        engine = engine.with_fixed_today(today);
    }

    engine.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if is_quit(&line) {
            break;
        }
        match engine.handle_turn(&line).await {
            Ok(outcome) => tracing::debug!(stage = %outcome.stage, "Turn complete"),
            Err(IntakeError::MessageTooLong(max)) => {
                println!("(Message too long; please keep it under {} characters.)", max);
            }
            Err(e) => tracing::warn!(error = %e, "Turn rejected"),
        }
    }

    tracing::info!(stage = %engine.stage().await, "Session ended");
    Ok(())
}
