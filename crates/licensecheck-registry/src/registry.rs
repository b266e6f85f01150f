//! # License Registry
//!
//! The immutable record store. Construction validates the dataset
//! invariants once; afterwards the registry only answers lookups and
//! searches.
//!
//! ## Dataset Files
//!
//! A dataset file is a list of records, as JSON (`.json`) or YAML
//! (`.yaml` / `.yml`). Field names are snake_case, `status` is one of
//! `active`, `expired`, `suspended`, and dates are `YYYY-MM-DD`:
//!
//! ```yaml
//! - id: "1"
//!   name: Dr. María González
//!   license_number: MD-12345
//!   profession: Médico General
//!   status: active
//!   issue_date: 2020-03-15
//!   expiry_date: 2025-03-15
//!   jurisdiction: Antioquia
//!   email: maria.gonzalez@email.com
//!   phone: +57 300 123 4567
//!   verified: true
//! ```

use std::collections::HashSet;
use std::path::Path;

use licensecheck_core::{LicenseId, LicenseRecord};

use crate::error::RegistryError;
use crate::sample::sample_records;
use crate::search::{filter, SearchQuery};

/// Read-only collection of license records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRegistry {
    records: Vec<LicenseRecord>,
}

impl LicenseRegistry {
    /// The built-in sample dataset.
    pub fn sample() -> Self {
        Self {
            records: sample_records(),
        }
    }

    /// Build a registry from records, enforcing identifier uniqueness and
    /// well-formed validity periods.
    pub fn from_records(records: Vec<LicenseRecord>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if record.id.is_blank() {
                return Err(RegistryError::BlankId { index });
            }
            if !seen.insert(&record.id) {
                return Err(RegistryError::DuplicateId(record.id.clone()));
            }
            if !record.has_valid_period() {
                return Err(RegistryError::InvalidPeriod {
                    id: record.id.clone(),
                    issue: record.issue_date,
                    expiry: record.expiry_date,
                });
            }
        }
        Ok(Self { records })
    }

    /// Decode and validate a JSON dataset.
    pub fn from_json_str(input: &str) -> Result<Self, RegistryError> {
        let records: Vec<LicenseRecord> = serde_json::from_str(input)?;
        Self::from_records(records)
    }

    /// Decode and validate a YAML dataset.
    pub fn from_yaml_str(input: &str) -> Result<Self, RegistryError> {
        let records: Vec<LicenseRecord> = serde_yaml::from_str(input)?;
        Self::from_records(records)
    }

    /// Load a dataset file, choosing the decoder by extension.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let decode: fn(&str) -> Result<Self, RegistryError> = match ext.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(RegistryError::UnsupportedFormat(path.to_path_buf())),
        };
        let input = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = decode(&input)?;
        tracing::info!(
            path = %path.display(),
            records = registry.len(),
            "loaded license dataset"
        );
        Ok(registry)
    }

    /// All records, in dataset order.
    pub fn records(&self) -> &[LicenseRecord] {
        &self.records
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: &LicenseId) -> Option<&LicenseRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a search. `None` when the query is blank (no search performed).
    pub fn search(&self, raw: &str) -> Option<Vec<LicenseRecord>> {
        let query = SearchQuery::parse(raw)?;
        let hits = filter(&self.records, &query);
        tracing::debug!(query = %query, hits = hits.len(), "license search");
        Some(hits)
    }
}

impl Default for LicenseRegistry {
    fn default() -> Self {
        Self::sample()
    }
}
