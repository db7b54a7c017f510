use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{info, warn};

use lexicon_engine::{LoadOutcome, LoadPolicy, TermStore};
use lexicon_executor::{DictionaryHandler, Dispatcher};

mod cli;
mod config;
mod session;

use cli::Cli;
use config::HostConfig;
use session::{ConsoleWriter, Session};

fn setup_logging(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut config = HostConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.store.data_dir = dir.clone();
    }
    if cli.start_empty {
        config.store.load_policy = LoadPolicy::StartEmpty;
    }

    let store = TermStore::open(&config.store)
        .with_context(|| format!("Failed to open dictionary {}", config.store.path().display()))?;
    match store.load_outcome() {
        LoadOutcome::Fresh => info!("No dictionary yet, starting empty"),
        LoadOutcome::Loaded { terms } => info!(terms, "Dictionary loaded"),
        LoadOutcome::Recovered { reason } => warn!(%reason, "Dictionary was unreadable, starting empty"),
    }

    let handler = DictionaryHandler::with_messages(
        Arc::new(store),
        Arc::new(config.whitelist),
        Arc::new(config.messages),
    );
    let mut dispatcher = Dispatcher::new();
    dispatcher.register(handler);

    let session = Session::new(
        dispatcher,
        config.command_prefix,
        cli.nick.clone(),
        cli.sender_mask(),
        cli.target.clone(),
    );
    let mut writer = ConsoleWriter::new(io::stdout());

    if !cli.exec.is_empty() {
        for line in &cli.exec {
            session.run_line(line, &mut writer)?;
        }
        return Ok(());
    }

    let mut editor = DefaultEditor::new().context("Failed to start line editor")?;
    loop {
        match editor.readline("lexicon> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(line.as_str());
                session.run_line(&line, &mut writer)?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    Ok(())
}
