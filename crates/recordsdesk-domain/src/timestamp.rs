//! Timestamp value type and pure date utilities
//!
//! A timestamp is a plain immutable UTC instant that serializes as an
//! RFC 3339 string. All date arithmetic goes through the small pure
//! helpers below rather than methods on the value itself.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC instant. Serializes as an RFC 3339 string.
///
/// # Examples
///
/// ```
/// use recordsdesk_domain::Timestamp;
///
/// let a = Timestamp::now();
/// let b = Timestamp::now();
/// assert!(a <= b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current instant
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap an existing instant
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse from an RFC 3339 string
    pub fn parse(s: &str) -> Option<Self> {
        DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| Self(dt.with_timezone(&Utc)))
    }

    /// The underlying instant
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar date (UTC) of this instant
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Leniently parse a `YYYY-MM-DD` date.
///
/// Malformed input (including anything arriving from query parameters)
/// yields `None` rather than an error, so an invalid date degrades to
/// "no constraint" instead of failing the whole operation.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// First instant of the given date (00:00:00 UTC)
pub fn day_start(date: NaiveDate) -> Timestamp {
    Timestamp(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Last whole second of the given date (23:59:59 UTC, inclusive bound)
pub fn day_end(date: NaiveDate) -> Timestamp {
    let end = date
        .and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    Timestamp(Utc.from_utc_datetime(&end))
}
