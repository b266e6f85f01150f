//! # Registry Errors
//!
//! Failures while building a registry from an external dataset. The
//! built-in sample never produces one.

use std::path::PathBuf;

use chrono::NaiveDate;
use licensecheck_core::LicenseId;
use thiserror::Error;

/// Errors raised while loading or validating a dataset.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Dataset file extension is not `.json`, `.yaml` or `.yml`.
    #[error("unsupported dataset format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// JSON dataset could not be decoded.
    #[error("invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML dataset could not be decoded.
    #[error("invalid YAML dataset: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A record has an empty identifier.
    #[error("record at position {index} has a blank identifier")]
    BlankId {
        /// Zero-based position in the dataset.
        index: usize,
    },

    /// Two records share an identifier.
    #[error("duplicate record identifier {0}")]
    DuplicateId(LicenseId),

    /// A record expires before it was issued.
    #[error("record {id} expires ({expiry}) before it was issued ({issue})")]
    InvalidPeriod {
        /// Offending record.
        id: LicenseId,
        /// Issue date.
        issue: NaiveDate,
        /// Expiry date.
        expiry: NaiveDate,
    },
}
