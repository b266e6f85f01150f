//! # licensecheck-registry: License Record Registry
//!
//! Owns the dataset the interface searches. The registry is built once at
//! process start, from the built-in sample or from a JSON/YAML file, and
//! is read-only afterwards.
//!
//! ## Modules
//!
//! - [`registry`]: `LicenseRegistry`, construction and dataset validation.
//! - [`sample`]: the three built-in sample records.
//! - [`search`]: query normalization and the substring filter.
//! - [`error`]: `RegistryError`.
//!
//! ## Invariants
//!
//! - Identifiers are non-blank and unique.
//! - Every record has `issue_date <= expiry_date`.
//! - Search preserves dataset order and never mutates the registry.

pub mod error;
pub mod registry;
pub mod sample;
pub mod search;

pub use error::RegistryError;
pub use registry::LicenseRegistry;
pub use search::{filter, SearchQuery};
