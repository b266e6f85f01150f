//! # Substring Search
//!
//! A record matches a query when the lowercased query is a substring of
//! the lowercased holder name, license number, or profession. Lowercasing
//! is Unicode-aware, so `MARÍA` matches `María`.
//!
//! Queries are trimmed before use. A query that is empty after trimming is
//! not a search at all: [`SearchQuery::parse`] returns `None` and callers
//! leave their previous results untouched.
//!
//! Results keep dataset order. The filter is pure and idempotent:
//! `filter(filter(d, q), q) == filter(d, q)`.

use licensecheck_core::LicenseRecord;
use serde::{Deserialize, Serialize};

/// A validated, non-empty search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    text: String,
    needle: String,
}

impl SearchQuery {
    /// Trim the raw input; `None` when nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    /// The trimmed query as typed.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the record's name, license number or profession contains the query.
    pub fn matches(&self, record: &LicenseRecord) -> bool {
        [&record.name, &record.license_number, &record.profession]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Records matching `query`, in input order.
pub fn filter(records: &[LicenseRecord], query: &SearchQuery) -> Vec<LicenseRecord> {
    records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect()
}
