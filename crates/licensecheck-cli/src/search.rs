//! # Search Subcommand
//!
//! Runs the registry filter once and prints the hits, optionally narrowed
//! to one status. Exit code 0 when at least one record matched, 1 when
//! none did.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use licensecheck_core::{LicenseStatus, Locale};
use licensecheck_registry::LicenseRegistry;

use crate::{summary_line, OutputFormat};

/// Arguments for the `licensecheck search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for in names, license numbers and professions.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Language for labels and dates.
    #[arg(long, default_value = "es")]
    pub lang: Locale,

    /// Only keep records with this status (active, expired, suspended).
    #[arg(long)]
    pub status: Option<LicenseStatus>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the search subcommand.
pub fn run_search(args: &SearchArgs, registry: &LicenseRegistry, out: &mut impl Write) -> Result<u8> {
    let Some(mut hits) = registry.search(&args.query) else {
        bail!("query is blank");
    };
    if let Some(status) = args.status {
        hits.retain(|record| record.status == status);
    }
    tracing::info!(query = %args.query.trim(), hits = hits.len(), "search complete");

    match args.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &hits)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            let texts = args.lang.texts();
            if hits.is_empty() {
                writeln!(out, "{}", texts.no_results)?;
                writeln!(out, "{}", texts.try_another)?;
            } else {
                writeln!(out, "{}", texts.results_heading(hits.len()))?;
                for record in &hits {
                    writeln!(out, "{}", summary_line(record, args.lang))?;
                }
            }
        }
    }

    Ok(if hits.is_empty() { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(query: &str, lang: Locale, format: OutputFormat) -> (Result<u8>, String) {
        run_args(SearchArgs {
            query: query.to_string(),
            lang,
            status: None,
            format,
        })
    }

    fn run_args(args: SearchArgs) -> (Result<u8>, String) {
        let mut buf = Vec::new();
        let code = run_search(&args, &LicenseRegistry::sample(), &mut buf);
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn text_output_lists_hits() {
        let (code, out) = run("MARÍA", Locale::Es, OutputFormat::Text);
        assert_eq!(code.unwrap(), 0);
        assert!(out.starts_with("1 resultado encontrado\n"));
        assert!(out.contains("MD-12345"));
        assert!(out.contains("Activa"));
    }

    #[test]
    fn json_output_is_record_array() {
        let (code, out) = run("ing", Locale::En, OutputFormat::Json);
        assert_eq!(code.unwrap(), 0);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let hits = value.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["license_number"], "ENG-67890");
    }

    #[test]
    fn no_match_exits_one() {
        let (code, out) = run("zzz", Locale::En, OutputFormat::Text);
        assert_eq!(code.unwrap(), 1);
        assert!(out.starts_with("No results found\n"));
    }

    #[test]
    fn status_filter_narrows_hits() {
        let (code, out) = run_args(SearchArgs {
            query: "a".to_string(),
            lang: Locale::En,
            status: Some(LicenseStatus::Expired),
            format: OutputFormat::Text,
        });
        assert_eq!(code.unwrap(), 0);
        assert!(out.starts_with("1 result found\n"));
        assert!(out.contains("LAW-54321"));
    }

    #[test]
    fn blank_query_is_an_error() {
        let (code, out) = run("   ", Locale::Es, OutputFormat::Text);
        assert!(code.is_err());
        assert!(out.is_empty());
    }
}
