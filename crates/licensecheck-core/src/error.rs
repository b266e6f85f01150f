//! # Error Types
//!
//! Errors raised while interpreting external input as core domain values
//! (locale tags and status names). All use `thiserror`.

use thiserror::Error;

/// Top-level error type for core domain parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LicenseCheckError {
    /// Language tag is not one of the supported dictionaries.
    #[error("unsupported locale: {0:?} (expected \"es\" or \"en\")")]
    UnsupportedLocale(String),

    /// Status name is not one of active / expired / suspended.
    #[error("unknown license status: {0:?}")]
    UnknownStatus(String),
}
