//! # licensecheck-core: Foundational Types for LicenseCheck
//!
//! Defines the domain vocabulary shared by every other crate in the
//! workspace: the license record, its status, the two UI dictionaries,
//! and locale-aware date rendering. Depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `LicenseId` wraps the record identifier so it
//!    cannot be confused with a license number or a holder name.
//!
//! 2. **Closed status set.** `LicenseStatus` has exactly three variants and
//!    every presentation mapping over it is an exhaustive `match`.
//!
//! 3. **Static dictionaries.** `Texts` values are `'static` constants; the
//!    active dictionary is selected by `Locale`, never mutated.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `licensecheck-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod i18n;
pub mod identity;
pub mod record;
pub mod status;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::LicenseCheckError;
pub use i18n::{Locale, Texts};
pub use identity::LicenseId;
pub use record::LicenseRecord;
pub use status::LicenseStatus;
pub use temporal::format_date;
