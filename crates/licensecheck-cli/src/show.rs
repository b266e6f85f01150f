//! # Show Subcommand
//!
//! Prints one record by identifier.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use licensecheck_core::{LicenseId, Locale};
use licensecheck_registry::LicenseRegistry;

use crate::{detail_block, OutputFormat};

/// Arguments for the `licensecheck show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Record identifier.
    #[arg(value_name = "ID")]
    pub id: String,

    /// Language for labels and dates.
    #[arg(long, default_value = "es")]
    pub lang: Locale,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the show subcommand.
pub fn run_show(args: &ShowArgs, registry: &LicenseRegistry, out: &mut impl Write) -> Result<u8> {
    let id = LicenseId::new(args.id.trim());
    let record = registry
        .get(&id)
        .with_context(|| format!("license {id} not found"))?;

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, record)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write!(out, "{}", detail_block(record, args.lang))?,
    }
    Ok(0)
}
