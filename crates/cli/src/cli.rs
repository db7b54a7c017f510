//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lexicon")]
#[command(version, about = "Chat-style console for the lexicon term dictionary", long_about = None)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding dictionary.dat (overrides the config)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Start empty instead of failing when the dictionary cannot be loaded
    #[arg(long)]
    pub start_empty: bool,

    /// Nick to send commands as
    #[arg(long, default_value = "console")]
    pub nick: String,

    /// Full sender mask used for authorization (default: <nick>!<nick>@localhost)
    #[arg(long)]
    pub mask: Option<String>,

    /// Room the commands are sent to
    #[arg(long, default_value = "#console")]
    pub target: String,

    /// Run these lines and exit instead of starting a prompt
    #[arg(short = 'e', long = "exec")]
    pub exec: Vec<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Sender mask, derived from the nick if not given.
    pub fn sender_mask(&self) -> String {
        self.mask
            .clone()
            .unwrap_or_else(|| format!("{0}!{0}@localhost", self.nick))
    }
}
