//! # Calendar Dates
//!
//! License validity dates are plain calendar dates (`chrono::NaiveDate`),
//! with no time-of-day or zone. On the wire and in dataset files they are
//! `YYYY-MM-DD`. For display they follow the short date convention of the
//! active locale, without zero padding:
//!
//! | Locale | Pattern | 2020-03-15 |
//! |--------|---------|------------|
//! | es (es-CO) | `d/m/yyyy` | `15/3/2020` |
//! | en (en-US) | `m/d/yyyy` | `3/15/2020` |

use chrono::{Datelike, NaiveDate};

use crate::i18n::Locale;

/// Render a date in the short format of the given locale.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::Es => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        Locale::En => format!("{}/{}/{}", date.month(), date.day(), date.year()),
    }
}
