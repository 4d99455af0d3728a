use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a supply by the remote system.
/// Opaque to the client: the console never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplyId(String);

impl SupplyId {
    /// Creates a new SupplyId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SupplyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SupplyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SupplyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for SupplyId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("date.unparseable")]
pub struct DateParseError;

/// Calendar date of a supply entry, canonical form `YYYY-MM-DD` in UTC.
///
/// All date handling funnels through this type: a canonical string parses
/// to itself, any timestamp representation is reduced to its UTC calendar
/// date, and anything else is an explicit error. Normalization is
/// idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryDate(NaiveDate);

impl EntryDate {
    pub fn parse(input: &str) -> Result<Self, DateParseError> {
        let input = input.trim();

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            return Ok(Self(date));
        }

        // Timestamps with an explicit offset are reduced to their UTC date.
        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(dt.with_timezone(&Utc).date_naive()));
        }

        // A bare datetime carries no offset and is read as UTC.
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(Self(naive.date()));
        }

        Err(DateParseError)
    }

    /// Today's date in UTC, independent of the machine's timezone.
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl std::fmt::Display for EntryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for EntryDate {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
