// Race result domain model
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Tick and tooltip formatter for race times
pub const TIME_FORMAT: &str = "%M:%S";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("race time '{0}' is missing a ':' separator")]
    MissingSeparator(String),
    #[error("race time '{0}' has a non-numeric component")]
    NotNumeric(String),
    #[error("race time '{0}' does not fit on the reference date")]
    OutOfRange(String),
}

#[derive(Debug, Clone)]
pub struct RaceRecord {
    pub year: i32,
    pub time: DateTime<Utc>,
    pub name: String,
    pub nationality: String,
    pub doping: String,
}

impl RaceRecord {
    pub fn new(
        year: i32,
        time: DateTime<Utc>,
        name: String,
        nationality: String,
        doping: String,
    ) -> Self {
        Self {
            year,
            time,
            name,
            nationality,
            doping,
        }
    }

    /// A non-empty doping note flags the rider
    pub fn doping_flagged(&self) -> bool {
        !self.doping.is_empty()
    }

    /// ISO-8601 form of the reference-date time, e.g. "1970-01-01T00:36:50.000Z"
    pub fn time_iso(&self) -> String {
        self.time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Minutes:seconds label, zero-padded, e.g. "36:50"
    pub fn time_label(&self) -> String {
        self.time.format(TIME_FORMAT).to_string()
    }
}

/// Parse a "MM:SS" race time onto the shared reference instant
/// (1970-01-01T00:00:00Z). The first component is minutes, the second
/// seconds; any further components are ignored.
pub fn parse_race_time(text: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let mut parts = text.split(':');
    let minutes = parts
        .next()
        .ok_or_else(|| TimeParseError::MissingSeparator(text.to_string()))?;
    let seconds = parts
        .next()
        .ok_or_else(|| TimeParseError::MissingSeparator(text.to_string()))?;

    let minutes: i64 = minutes
        .trim()
        .parse()
        .map_err(|_| TimeParseError::NotNumeric(text.to_string()))?;
    let seconds: i64 = seconds
        .trim()
        .parse()
        .map_err(|_| TimeParseError::NotNumeric(text.to_string()))?;

    DateTime::from_timestamp(minutes * 60 + seconds, 0)
        .ok_or_else(|| TimeParseError::OutOfRange(text.to_string()))
}
