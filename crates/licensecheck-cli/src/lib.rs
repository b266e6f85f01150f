//! # licensecheck-cli: Command-Line Lookup
//!
//! Provides the `licensecheck` command over the same registry the web
//! service serves.
//!
//! ## Subcommands
//!
//! - `licensecheck search`: Substring search by name, license number or profession.
//! - `licensecheck show`: One record by identifier.
//! - `licensecheck dictionary`: Dump a UI dictionary as JSON.
//!
//! ```bash
//! licensecheck search maría
//! licensecheck --data licenses.yaml search ENG --format json
//! licensecheck show 3 --lang en
//! ```

pub mod dictionary;
pub mod search;
pub mod show;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use licensecheck_core::{format_date, LicenseRecord, Locale};
use licensecheck_registry::LicenseRegistry;

/// Output format for record listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, localized.
    #[default]
    Text,
    /// Raw records as pretty JSON.
    Json,
}

/// Load the dataset at `path`, or the built-in sample when absent.
pub fn load_registry(path: Option<&Path>) -> Result<LicenseRegistry> {
    match path {
        Some(path) => LicenseRegistry::load(path)
            .with_context(|| format!("failed to load dataset: {}", path.display())),
        None => {
            tracing::debug!("no dataset given, using built-in sample");
            Ok(LicenseRegistry::sample())
        }
    }
}

/// Flush `out` after a subcommand ran. A failed flush fails the command.
pub fn flush_output(result: Result<u8>, out: &mut impl Write) -> Result<u8> {
    result.and_then(|code| out.flush().map(|_| code).map_err(Into::into))
}

/// One-line summary used by `search`.
pub(crate) fn summary_line(record: &LicenseRecord, lang: Locale) -> String {
    let texts = lang.texts();
    let verified = if record.verified {
        texts.verified
    } else {
        texts.not_verified
    };
    format!(
        "{:<10} {}  |  {}  |  {}  |  {}  [{}]  #{}",
        record.license_number,
        record.name,
        record.profession,
        record.status.label(texts),
        record.jurisdiction,
        verified,
        record.id
    )
}

/// Labelled multi-line block used by `show`.
pub(crate) fn detail_block(record: &LicenseRecord, lang: Locale) -> String {
    let texts = lang.texts();
    let verified = if record.verified {
        texts.verified
    } else {
        texts.not_verified
    };
    let rows = [
        (texts.license_number, record.license_number.clone()),
        (texts.profession, record.profession.clone()),
        (texts.status, record.status.label(texts).to_string()),
        (texts.issue_date, format_date(record.issue_date, lang)),
        (texts.expiry_date, format_date(record.expiry_date, lang)),
        (texts.state, record.jurisdiction.clone()),
        (texts.contact, format!("{}, {}", record.email, record.phone)),
    ];
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);

    let mut out = format!("{}\n{verified}\n", record.name);
    for (label, value) in rows {
        let pad = width - label.chars().count();
        out.push_str(&format!("{label}:{} {value}\n", " ".repeat(pad)));
    }
    out
}
