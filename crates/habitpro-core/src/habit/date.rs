//! Calendar-date encoding for habit records.
//!
//! Dates are written as `YYYY-MM-DD`. Reading also accepts the browser
//! `toDateString()` form (`"Mon Oct 19 2026"`) so records exported by the
//! web widget import unchanged.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer};

const ISO_FORMAT: &str = "%Y-%m-%d";
const BROWSER_FORMAT: &str = "%a %b %d %Y";

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a stored date in either accepted encoding.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, BROWSER_FORMAT))
        .ok()
}

pub(super) fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date '{s}'"))),
    }
}

pub(super) fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<String>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .iter()
        .map(|s| {
            parse_date(s).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{s}'")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_and_browser_forms() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(parse_date("2026-10-19"), Some(expected));
        assert_eq!(parse_date("Mon Oct 19 2026"), Some(expected));
        assert_eq!(parse_date("yesterday"), None);
    }
}
