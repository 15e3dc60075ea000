//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use fittropolis::adapters::{JsonFileStore, TerminalView};
use fittropolis::config::GlobalConfig;
use fittropolis::core::services::{CorruptPolicy, PantryStore};
use fittropolis::output::OutputMode;

/// fittropolis - Track what is in your pantry
#[derive(Parser, Debug)]
#[command(
    name = "fittropolis",
    version,
    about = "Track what is in your pantry",
    long_about = "Keep a list of pantry items with quantities and expiry dates.\n\n\
                  Items are listed in the order they were added.\n\
                  Remove an item by the position shown in the listing."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Storage file (overrides the configured location)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// What to do with unreadable pantry data: reset, fail (overrides config)
    #[arg(long, global = true, value_name = "POLICY")]
    pub on_corrupt: Option<CorruptPolicy>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an item to the end of the pantry
    Add {
        /// Item name
        name: String,

        /// Quantity (whole number, defaults to 1)
        #[arg(short, long)]
        qty: Option<String>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(short, long)]
        expiry: Option<String>,
    },

    /// Show the pantry
    List,

    /// Remove the item at a position shown by `list`
    Remove {
        /// Zero-based position
        index: usize,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("fittropolis v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'fittropolis --help' for usage");
            println!("Run 'fittropolis add <name>' to get started");
        }
        return Ok(());
    };

    let config = GlobalConfig::load();
    let path = cli.store.unwrap_or_else(|| config.storage_path());
    let policy = cli.on_corrupt.unwrap_or(config.storage.on_corrupt);
    log::debug!("Using storage file {} (on corrupt data: {policy})", path.display());

    let mut store = PantryStore::new(JsonFileStore::new(path)).with_policy(policy);
    // JSON output is one document per command: the listing for `list`,
    // the operation result for mutations
    if output_mode == OutputMode::Human || matches!(command, Command::List) {
        store.subscribe(TerminalView::new(output_mode));
    }

    match command {
        Command::Add { name, qty, expiry } => {
            commands::add(&store, &name, qty.as_deref(), expiry.as_deref(), output_mode)
        },
        Command::List => commands::list(&store),
        Command::Remove { index } => commands::remove(&store, index, output_mode),
        Command::Version => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("fittropolis v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
    }
}
