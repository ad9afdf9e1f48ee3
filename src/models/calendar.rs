use std::fmt;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid calendar date: {0}")]
pub struct InvalidDateError(pub String);

/// A civil date: (year, month, day) with no time-of-day and no offset.
///
/// Every date that enters a quote calculation is converted to this type
/// first, so rate-window comparisons and day arithmetic can never be
/// shifted by the timezone of whatever produced the input. Two values are
/// equal iff they name the same civil date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| InvalidDateError(format!("{:04}-{:02}-{:02}", year, month, day)))
    }

    /// Normalize any supported date representation to a calendar date.
    ///
    /// Accepts a plain date (`2025-06-15`), an RFC 3339 timestamp, or a
    /// naive datetime. Timestamps keep the date fields as authored: the
    /// offset is discarded, never applied, so `2025-06-15T23:00:00-07:00`
    /// is June 15 here even though it is June 16 in UTC.
    pub fn parse(input: &str) -> Result<Self, InvalidDateError> {
        let trimmed = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(CalendarDate(date));
        }
        if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
            // date_naive() is the date in the stamp's own offset, which is
            // the date the author saw when the value was written.
            return Ok(CalendarDate(stamp.date_naive()));
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(CalendarDate(stamp.date()));
        }
        if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
            return Ok(CalendarDate(stamp.date()));
        }

        Err(InvalidDateError(trimmed.to_string()))
    }

    /// Proleptic Gregorian day arithmetic on the (y, m, d) triple alone.
    pub fn add_days(self, days: i64) -> Result<Self, InvalidDateError> {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(CalendarDate)
            .ok_or_else(|| InvalidDateError(format!("{} + {} days", self, days)))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        CalendarDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(CalendarDate::parse("2025-06-15").unwrap(), date(2025, 6, 15));
    }

    #[test]
    fn test_parse_ignores_timestamp_offset() {
        // The authored date is June 15 in every one of these, no matter
        // which side of UTC the offset falls on.
        let expected = date(2025, 6, 15);
        assert_eq!(CalendarDate::parse("2025-06-15").unwrap(), expected);
        assert_eq!(
            CalendarDate::parse("2025-06-15T00:30:00+05:30").unwrap(),
            expected
        );
        assert_eq!(
            CalendarDate::parse("2025-06-15T23:00:00-07:00").unwrap(),
            expected
        );
        assert_eq!(
            CalendarDate::parse("2025-06-15T12:00:00Z").unwrap(),
            expected
        );
        assert_eq!(
            CalendarDate::parse("2025-06-15T08:45:00").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CalendarDate::parse("June 15th").is_err());
        assert!(CalendarDate::parse("2025-13-01").is_err());
        assert!(CalendarDate::parse("2025-02-30").is_err());
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn test_add_days_crosses_month_and_leap_boundaries() {
        assert_eq!(date(2025, 1, 31).add_days(1).unwrap(), date(2025, 2, 1));
        assert_eq!(date(2024, 2, 28).add_days(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2025, 2, 28).add_days(1).unwrap(), date(2025, 3, 1));
        assert_eq!(date(2025, 12, 31).add_days(1).unwrap(), date(2026, 1, 1));
        assert_eq!(date(2025, 6, 15).add_days(-15).unwrap(), date(2025, 5, 31));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2025, 6, 1).days_until(date(2025, 6, 4)), 3);
        assert_eq!(date(2025, 6, 4).days_until(date(2025, 6, 1)), -3);
        assert_eq!(date(2024, 2, 1).days_until(date(2024, 3, 1)), 29);
        assert_eq!(date(2025, 6, 1).days_until(date(2025, 6, 1)), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&date(2025, 6, 15)).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let back: CalendarDate = serde_json::from_str("\"2025-06-15T18:00:00-11:00\"").unwrap();
        assert_eq!(back, date(2025, 6, 15));
    }
}
