//! # Time Utilities
//!
//! RFC 3339 parsing for configuration values that end up as block timestamps.

use chrono::{DateTime, Utc};

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::FailToDateParse(moment.to_string()))
}

/// Seconds since the Unix epoch. Moments before the epoch are rejected.
pub fn unix_seconds(moment: DateTime<Utc>) -> Result<u64, Error> {
    u64::try_from(moment.timestamp()).map_err(|_| Error::BeforeEpoch(moment.to_rfc3339()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
    BeforeEpoch(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
