//! Nanosecond-precision instants
//!
//! Entries carry their date as nanoseconds since the Unix epoch. Calendar
//! questions (which day, which month) are answered in a fixed UTC offset
//! supplied by the caller, usually from the user's settings.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An instant, stored as nanoseconds since 1970-01-01T00:00:00Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Earliest representable instant (1677-09-21)
    pub const MIN: Timestamp = Timestamp(i64::MIN);

    /// Latest representable instant (2262-04-11)
    pub const MAX: Timestamp = Timestamp(i64::MAX);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn nanos(&self) -> i64 {
        self.0
    }

    /// The current instant
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Convert a UTC datetime, clamping to the representable range
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        match dt.timestamp_nanos_opt() {
            Some(nanos) => Self(nanos),
            None if dt.year() < 1970 => Self::MIN,
            None => Self::MAX,
        }
    }

    /// Interpret a wall-clock datetime in the given offset
    pub fn from_local(naive: NaiveDateTime, offset: &FixedOffset) -> Self {
        // A fixed offset never produces ambiguous or skipped local times
        match offset.from_local_datetime(&naive).single() {
            Some(dt) => Self::from_utc(dt.with_timezone(&Utc)),
            None if naive.year() < 1970 => Self::MIN,
            None => Self::MAX,
        }
    }

    /// First instant of a calendar day
    pub fn start_of_day(date: NaiveDate, offset: &FixedOffset) -> Self {
        Self::from_local(date.and_time(NaiveTime::MIN), offset)
    }

    /// Last instant of a calendar day (one nanosecond before the next day)
    pub fn end_of_day(date: NaiveDate, offset: &FixedOffset) -> Self {
        match date.succ_opt() {
            Some(next) => Self::start_of_day(next, offset).pred(),
            None => Self::MAX,
        }
    }

    /// The instant one nanosecond earlier, saturating at `MIN`
    pub const fn pred(&self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Wall-clock datetime in the given offset
    pub fn to_local(&self, offset: &FixedOffset) -> NaiveDateTime {
        Utc.timestamp_nanos(self.0)
            .with_timezone(offset)
            .naive_local()
    }

    /// Calendar date in the given offset
    pub fn local_date(&self, offset: &FixedOffset) -> NaiveDate {
        self.to_local(offset).date()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Utc.timestamp_nanos(self.0).to_rfc3339())
    }
}
