//! # License Record
//!
//! A professional credential entry: who holds it, what it licenses, where
//! it was issued, its validity window, and how to contact the holder.
//! Records are values; nothing in the system mutates one after load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::LicenseId;
use crate::status::LicenseStatus;

/// A published professional license.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    /// Identifier, unique within the dataset.
    pub id: LicenseId,
    /// Holder name, including any honorific (`Dr.`, `Ing.`, `Abg.`).
    pub name: String,
    /// Authority-assigned license number, e.g. `MD-12345`.
    pub license_number: String,
    /// Licensed profession.
    pub profession: String,
    /// Current lifecycle status.
    pub status: LicenseStatus,
    /// Date the license was issued.
    pub issue_date: NaiveDate,
    /// Date the license expires.
    pub expiry_date: NaiveDate,
    /// Issuing jurisdiction (department / state).
    #[serde(alias = "state")]
    pub jurisdiction: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Whether authenticity has been independently confirmed.
    pub verified: bool,
    /// Optional photo reference (URL or asset path).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl LicenseRecord {
    /// Whether the validity window is well-formed (`issue_date <= expiry_date`).
    pub fn has_valid_period(&self) -> bool {
        self.issue_date <= self.expiry_date
    }
}
