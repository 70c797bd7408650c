//! Order-date normalization.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Date-only layouts accepted for order dates.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Datetime layouts accepted for order dates; the time part is dropped.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// An order date, either parsed to a canonical day or kept verbatim.
///
/// Parse failure is deliberately non-fatal: the raw text is retained and
/// flows through to the output record unchanged. The two variants keep that
/// ambiguity visible in the type instead of hiding it in control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDate {
    Canonical(NaiveDate),
    Raw(String),
}

impl OrderDate {
    /// Normalize a free-form date string.
    ///
    /// Tries the known date and datetime layouts in order; anything that
    /// matches none of them degrades to [`OrderDate::Raw`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        for layout in DATE_LAYOUTS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
                return Self::Canonical(date);
            }
        }
        for layout in DATETIME_LAYOUTS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, layout) {
                return Self::Canonical(datetime.date());
            }
        }
        Self::Raw(input.to_string())
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical(_))
    }
}

impl From<NaiveDate> for OrderDate {
    fn from(date: NaiveDate) -> Self {
        Self::Canonical(date)
    }
}

impl fmt::Display for OrderDate {
    /// Canonical dates render as `YYYY-MM-DD`; raw input renders unchanged.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canonical(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}
