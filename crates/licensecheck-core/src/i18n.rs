//! # UI Dictionaries
//!
//! Two parallel string tables, Spanish and English, selected by [`Locale`].
//! The tables are `'static` and read-only; switching language swaps which
//! table is active and nothing else.
//!
//! ## Invariants
//!
//! - [`Locale::Es`] is the default.
//! - [`Locale::toggle`] is an involution: toggling twice is the identity.
//! - Both dictionaries populate every field.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::LicenseCheckError;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish (Colombia).
    #[default]
    Es,
    /// English (United States).
    En,
}

impl Locale {
    /// Language tag used in URLs and the toggle button.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Self::Es => Self::En,
            Self::En => Self::Es,
        }
    }

    /// The active dictionary for this language.
    pub fn texts(&self) -> &'static Texts {
        match self {
            Self::Es => &ES,
            Self::En => &EN,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = LicenseCheckError;

    /// Accepts `es` / `en`, case-insensitive, tolerant of a region suffix
    /// (`es-CO`, `en_US`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        match primary {
            "es" => Ok(Self::Es),
            "en" => Ok(Self::En),
            _ => Err(LicenseCheckError::UnsupportedLocale(s.to_string())),
        }
    }
}

/// Every user-visible string of the interface, for one language.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Texts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_placeholder: &'static str,
    pub search_button: &'static str,
    pub login: &'static str,
    pub no_results: &'static str,
    pub try_another: &'static str,
    pub license_number: &'static str,
    pub profession: &'static str,
    pub status: &'static str,
    pub issue_date: &'static str,
    pub expiry_date: &'static str,
    pub state: &'static str,
    pub contact: &'static str,
    pub verified: &'static str,
    pub not_verified: &'static str,
    pub active: &'static str,
    pub expired: &'static str,
    pub suspended: &'static str,
    pub view_details: &'static str,
    pub close: &'static str,
    pub result_found: &'static str,
    pub results_found: &'static str,
    pub brand_tagline: &'static str,
    pub footer_tagline: &'static str,
}

impl Texts {
    /// Results heading, e.g. `"1 resultado encontrado"`.
    pub fn results_heading(&self, count: usize) -> String {
        let noun = if count == 1 {
            self.result_found
        } else {
            self.results_found
        };
        format!("{count} {noun}")
    }
}

/// Spanish dictionary.
pub static ES: Texts = Texts {
    title: "Verificación de Licencias Profesionales",
    subtitle: "Verifica la validez de licencias profesionales de manera rápida y segura",
    search_placeholder: "Buscar por nombre o número de licencia...",
    search_button: "Buscar",
    login: "Iniciar Sesión",
    no_results: "No se encontraron resultados",
    try_another: "Intenta con otro término de búsqueda",
    license_number: "Número de Licencia",
    profession: "Profesión",
    status: "Estado",
    issue_date: "Fecha de Emisión",
    expiry_date: "Fecha de Vencimiento",
    state: "Departamento",
    contact: "Contacto",
    verified: "Verificado",
    not_verified: "No Verificado",
    active: "Activa",
    expired: "Vencida",
    suspended: "Suspendida",
    view_details: "Ver Detalles",
    close: "Cerrar",
    result_found: "resultado encontrado",
    results_found: "resultados encontrados",
    brand_tagline: "Professional Verification",
    footer_tagline: "Plataforma segura de verificación de licencias profesionales",
};

/// English dictionary.
pub static EN: Texts = Texts {
    title: "Professional License Verification",
    subtitle: "Verify the validity of professional licenses quickly and securely",
    search_placeholder: "Search by name or license number...",
    search_button: "Search",
    login: "Login",
    no_results: "No results found",
    try_another: "Try a different search term",
    license_number: "License Number",
    profession: "Profession",
    status: "Status",
    issue_date: "Issue Date",
    expiry_date: "Expiry Date",
    state: "State",
    contact: "Contact",
    verified: "Verified",
    not_verified: "Not Verified",
    active: "Active",
    expired: "Expired",
    suspended: "Suspended",
    view_details: "View Details",
    close: "Close",
    result_found: "result found",
    results_found: "results found",
    brand_tagline: "Professional Verification",
    footer_tagline: "Secure professional license verification platform",
};
