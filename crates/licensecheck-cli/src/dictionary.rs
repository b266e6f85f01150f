//! # Dictionary Subcommand
//!
//! Dumps the interface strings for one language as pretty JSON.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use licensecheck_core::Locale;

/// Arguments for the `licensecheck dictionary` subcommand.
#[derive(Args, Debug)]
pub struct DictionaryArgs {
    /// Language to dump.
    #[arg(long, default_value = "es")]
    pub lang: Locale,
}

/// Execute the dictionary subcommand.
pub fn run_dictionary(args: &DictionaryArgs, out: &mut impl Write) -> Result<u8> {
    serde_json::to_writer_pretty(&mut *out, args.lang.texts())?;
    writeln!(out)?;
    Ok(0)
}
