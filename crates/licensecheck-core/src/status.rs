//! # License Status
//!
//! The three lifecycle states a published license record can be in, and
//! the pure presentation mappings over them (badge colour class and
//! localized label).
//!
//! ## Presentation
//!
//! | Status | Colour class | es | en |
//! |--------|--------------|----|----|
//! | Active | `text-green-600 bg-green-100` | Activa | Active |
//! | Expired | `text-red-600 bg-red-100` | Vencida | Expired |
//! | Suspended | `text-yellow-600 bg-yellow-100` | Suspendida | Suspended |

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LicenseCheckError;
use crate::i18n::Texts;

/// Lifecycle state of a professional license.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    /// License is valid.
    Active,
    /// License validity period has ended.
    Expired,
    /// License has been temporarily suspended.
    Suspended,
}

impl LicenseStatus {
    /// All statuses in canonical order.
    pub fn all() -> &'static [LicenseStatus] {
        &[Self::Active, Self::Expired, Self::Suspended]
    }

    /// Returns the snake_case identifier, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Suspended => "suspended",
        }
    }

    /// CSS colour classes for the status badge.
    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Active => "text-green-600 bg-green-100",
            Self::Expired => "text-red-600 bg-red-100",
            Self::Suspended => "text-yellow-600 bg-yellow-100",
        }
    }

    /// Localized label from the given dictionary.
    pub fn label<'a>(&self, texts: &'a Texts) -> &'a str {
        match self {
            Self::Active => texts.active,
            Self::Expired => texts.expired,
            Self::Suspended => texts.suspended,
        }
    }
}

impl std::fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseStatus {
    type Err = LicenseCheckError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "suspended" => Ok(Self::Suspended),
            _ => Err(LicenseCheckError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn color_classes_are_fixed() {
        assert_eq!(LicenseStatus::Active.color_class(), "text-green-600 bg-green-100");
        assert_eq!(LicenseStatus::Expired.color_class(), "text-red-600 bg-red-100");
        assert_eq!(
            LicenseStatus::Suspended.color_class(),
            "text-yellow-600 bg-yellow-100"
        );
    }

    #[test]
    fn spanish_labels() {
        let t = Locale::Es.texts();
        assert_eq!(LicenseStatus::Active.label(t), "Activa");
        assert_eq!(LicenseStatus::Expired.label(t), "Vencida");
        assert_eq!(LicenseStatus::Suspended.label(t), "Suspendida");
    }

    #[test]
    fn english_labels() {
        let t = Locale::En.texts();
        assert_eq!(LicenseStatus::Active.label(t), "Active");
        assert_eq!(LicenseStatus::Expired.label(t), "Expired");
        assert_eq!(LicenseStatus::Suspended.label(t), "Suspended");
    }

    #[test]
    fn parse_matches_serde() {
        for status in LicenseStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<LicenseStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn parse_ignores_case() {
        assert_eq!(" Active".parse::<LicenseStatus>().unwrap(), LicenseStatus::Active);
        assert_eq!(
            "revoked".parse::<LicenseStatus>(),
            Err(LicenseCheckError::UnknownStatus("revoked".into()))
        );
    }
}
