//! # Built-in Sample Dataset
//!
//! The three records served when no dataset file is configured.

use chrono::NaiveDate;
use licensecheck_core::{LicenseId, LicenseRecord, LicenseStatus};

/// Dates are checked at compile time: an invalid literal fails const evaluation.
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

const MARIA_ISSUED: NaiveDate = ymd(2020, 3, 15);
const MARIA_EXPIRES: NaiveDate = ymd(2025, 3, 15);
const CARLOS_ISSUED: NaiveDate = ymd(2019, 8, 20);
const CARLOS_EXPIRES: NaiveDate = ymd(2024, 8, 20);
const ANA_ISSUED: NaiveDate = ymd(2018, 1, 10);
const ANA_EXPIRES: NaiveDate = ymd(2023, 1, 10);

/// The sample records, in display order.
pub fn sample_records() -> Vec<LicenseRecord> {
    vec![
        LicenseRecord {
            id: LicenseId::new("1"),
            name: "Dr. María González".into(),
            license_number: "MD-12345".into(),
            profession: "Médico General".into(),
            status: LicenseStatus::Active,
            issue_date: MARIA_ISSUED,
            expiry_date: MARIA_EXPIRES,
            jurisdiction: "Antioquia".into(),
            email: "maria.gonzalez@email.com".into(),
            phone: "+57 300 123 4567".into(),
            verified: true,
            photo: None,
        },
        LicenseRecord {
            id: LicenseId::new("2"),
            name: "Ing. Carlos Rodríguez".into(),
            license_number: "ENG-67890".into(),
            profession: "Ingeniero Civil".into(),
            status: LicenseStatus::Active,
            issue_date: CARLOS_ISSUED,
            expiry_date: CARLOS_EXPIRES,
            jurisdiction: "Cundinamarca".into(),
            email: "carlos.rodriguez@email.com".into(),
            phone: "+57 301 987 6543".into(),
            verified: true,
            photo: None,
        },
        LicenseRecord {
            id: LicenseId::new("3"),
            name: "Abg. Ana Martínez".into(),
            license_number: "LAW-54321".into(),
            profession: "Abogado".into(),
            status: LicenseStatus::Expired,
            issue_date: ANA_ISSUED,
            expiry_date: ANA_EXPIRES,
            jurisdiction: "Valle del Cauca".into(),
            email: "ana.martinez@email.com".into(),
            phone: "+57 302 456 7890".into(),
            verified: false,
            photo: None,
        },
    ]
}
