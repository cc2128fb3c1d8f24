//! ISO-8601 timestamps and the clock abstraction used to stamp edits

use crate::{DocModelError, Result};
use chrono::{DateTime, Datelike, Duration, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Mutex;

/// A UTC instant with millisecond precision.
///
/// Serializes as `2023-01-01T00:00:00.000Z`, the same shape JavaScript's
/// `Date.prototype.toISOString` produces, so exported templates stay
/// interchangeable with existing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current system time
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Wrap a chrono datetime, truncating to milliseconds
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(3))
    }

    /// Parse an RFC 3339 / ISO-8601 string
    pub fn parse(s: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::from_datetime(dt.with_timezone(&Utc)))
            .map_err(|e| DocModelError::InvalidTimestamp(format!("{}: {}", s, e)))
    }

    /// Get the underlying chrono datetime
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar year of this instant
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Format as `YYYY-MM-DDTHH:MM:SS.mmmZ`
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Return this timestamp if it is later than `previous`, otherwise one
    /// millisecond after `previous`. Edits stamped this way always move
    /// `updatedAt`, even under a frozen or coarse clock.
    pub fn strictly_after(self, previous: Timestamp) -> Timestamp {
        if self > previous {
            self
        } else {
            Timestamp(previous.0 + Duration::milliseconds(1))
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl std::str::FromStr for Timestamp {
    type Err = DocModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_datetime(datetime)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Source of "now" for stamping template edits
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that always reports the same instant until told otherwise
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    /// Create a clock frozen at `now`
    pub fn new(now: Timestamp) -> Self {
        Self { now: Mutex::new(now) }
    }

    /// Move the clock to a new instant
    pub fn set(&self, now: Timestamp) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    /// Advance the clock by a number of milliseconds
    pub fn advance_millis(&self, millis: i64) {
        let mut guard = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Timestamp(guard.0 + Duration::milliseconds(millis));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
