//! Calendar date as exchanged with the backend.

use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing an [`IsoDate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The input string is empty.
    #[error("date cannot be empty")]
    Empty,
    /// The input is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("unrecognized date: {0}")]
    Unrecognized(String),
}

/// A calendar date.
///
/// The backend is inconsistent about dates: form-submitted values come back
/// as `2019-09-01` while stored values come back as full timestamps such as
/// `2019-09-01T00:00:00.000Z`. Both are accepted; the time of day is dropped.
/// Serialization always produces `YYYY-MM-DD`.
///
/// ```
/// use portfolio_core::IsoDate;
///
/// let a: IsoDate = "2019-09-01".parse().unwrap();
/// let b: IsoDate = "2019-09-01T00:00:00.000Z".parse().unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "2019-09-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate(NaiveDate);

impl IsoDate {
    /// Wrap an existing date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse `YYYY-MM-DD` or an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or matches neither form.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateError::Empty);
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.date_naive()))
            .map_err(|_| DateError::Unrecognized(s.to_owned()))
    }

    /// The wrapped date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Short display form, e.g. `Sep 2019`.
    #[must_use]
    pub fn month_year(&self) -> String {
        self.0.format("%b %Y").to_string()
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for IsoDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        let date = IsoDate::parse("2021-06-30").unwrap();
        assert_eq!(date.year(), 2021);
        assert_eq!(date.to_string(), "2021-06-30");
    }

    #[test]
    fn test_parse_timestamp_drops_time() {
        let date = IsoDate::parse("2021-06-30T22:15:00.000Z").unwrap();
        assert_eq!(date.to_string(), "2021-06-30");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(IsoDate::parse("  "), Err(DateError::Empty));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            IsoDate::parse("last summer"),
            Err(DateError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_month_year() {
        let date = IsoDate::parse("2019-09-01").unwrap();
        assert_eq!(date.month_year(), "Sep 2019");
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        let result: Result<IsoDate, _> = serde_json::from_str("\"not a date\"");
        assert!(result.is_err());
    }
}
