//! Inspect configuration files as typed trees.
//!
//! ```text
//! config-tree app.yaml show
//! config-tree app.yaml get server.port
//! config-tree --format toml app.conf get-or log.0.level '"info"'
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use config_tree::config::loader::{self, Format};
use config_tree::config::{build, ConfigStore};
use config_tree::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "config-tree")]
#[command(about = "Load a configuration file and query it by dotted path", long_about = None)]
struct Cli {
    /// Input format; detected from the file extension when omitted.
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Log level used when RUST_LOG is not set.
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Configuration file to load.
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the whole tree
    Show,
    /// Print the node at a dotted path
    Get { path: String },
    /// Print the node at a dotted path, or a JSON default if it does not resolve
    GetOr { path: String, default: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = ConfigStore::global();
    loader::load_into(store, &cli.file, cli.format)?;

    match cli.command {
        Commands::Show => {
            println!("{}", store.root()?.to_json_pretty()?);
        }
        Commands::Get { path } => {
            println!("{}", store.get(&path)?.to_json_pretty()?);
        }
        Commands::GetOr { path, default } => {
            let default: serde_json::Value = serde_json::from_str(&default)?;
            let fallback = build(&default)?;
            println!("{}", store.must_get(&path, fallback)?.to_json_pretty()?);
        }
    }

    Ok(())
}
