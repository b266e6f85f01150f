//! # licensecheck CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use licensecheck_cli::dictionary::{run_dictionary, DictionaryArgs};
use licensecheck_cli::{flush_output, load_registry};
use licensecheck_cli::search::{run_search, SearchArgs};
use licensecheck_cli::show::{run_show, ShowArgs};

/// Professional license lookup.
///
/// Searches the license registry by name, license number or profession,
/// using the built-in sample unless a dataset file is given.
#[derive(Parser, Debug)]
#[command(name = "licensecheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Dataset file (.json, .yaml or .yml) to load instead of the sample.
    #[arg(long, global = true, env = "LICENSE_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search records by name, license number or profession.
    Search(SearchArgs),

    /// Show one record by identifier.
    Show(ShowArgs),

    /// Print the interface dictionary for a language as JSON.
    Dictionary(DictionaryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Dictionary(args) => run_dictionary(&args, &mut out),
        Commands::Search(args) => {
            load_registry(cli.data.as_deref()).and_then(|r| run_search(&args, &r, &mut out))
        }
        Commands::Show(args) => {
            load_registry(cli.data.as_deref()).and_then(|r| run_show(&args, &r, &mut out))
        }
    };

    match flush_output(result, &mut out) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
