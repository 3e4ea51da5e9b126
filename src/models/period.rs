//! Statement and analytics periods
//!
//! A period is either one calendar month or one calendar year. It resolves
//! to an inclusive range of instants in a caller-supplied UTC offset.

use chrono::{Datelike, FixedOffset, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::Timestamp;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A zero-based month index (0 = January, 11 = December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MonthIndex(u8);

impl MonthIndex {
    pub const JANUARY: MonthIndex = MonthIndex(0);
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    /// Create from a zero-based index, `None` outside 0-11
    pub const fn new(index: u32) -> Option<Self> {
        if index < 12 {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create from a calendar month number (1-12)
    pub const fn from_number(number: u32) -> Option<Self> {
        if number >= 1 && number <= 12 {
            Some(Self((number - 1) as u8))
        } else {
            None
        }
    }

    /// Zero-based index
    pub const fn index(&self) -> u32 {
        self.0 as u32
    }

    /// Calendar month number (1-12)
    pub const fn number(&self) -> u32 {
        self.0 as u32 + 1
    }

    /// English month name ("January")
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }
}

impl TryFrom<u32> for MonthIndex {
    type Error = String;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        MonthIndex::new(index).ok_or_else(|| format!("month index must be 0-11, got {}", index))
    }
}

impl From<MonthIndex> for u32 {
    fn from(month: MonthIndex) -> Self {
        month.index()
    }
}

/// Discriminator for the two period shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Month,
    Year,
}

/// An inclusive range of instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl DateRange {
    /// Build a range; `start` and `end` are swapped if given out of order
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range covering whole calendar days from `first` through `last`
    pub fn from_dates(first: NaiveDate, last: NaiveDate, offset: &FixedOffset) -> Self {
        Self::new(
            Timestamp::start_of_day(first, offset),
            Timestamp::end_of_day(last, offset),
        )
    }

    /// Inclusive containment check
    pub fn contains(&self, ts: Timestamp) -> bool {
        ts >= self.start && ts <= self.end
    }
}

/// A calendar month or calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Period {
    /// One calendar month
    Month { year: i32, month: MonthIndex },

    /// One calendar year
    Year { year: i32 },
}

impl Period {
    /// Create a monthly period
    pub fn month(year: i32, month: MonthIndex) -> Self {
        Self::Month { year, month }
    }

    /// Create a yearly period
    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    /// The month containing today's date in the given offset
    pub fn current_month(offset: &FixedOffset) -> Self {
        let today = Timestamp::now().local_date(offset);
        Self::Month {
            year: today.year(),
            month: MonthIndex(today.month0() as u8),
        }
    }

    /// The year containing today's date in the given offset
    pub fn current_year(offset: &FixedOffset) -> Self {
        Self::Year {
            year: Timestamp::now().local_date(offset).year(),
        }
    }

    pub fn period_type(&self) -> PeriodType {
        match self {
            Self::Month { .. } => PeriodType::Month,
            Self::Year { .. } => PeriodType::Year,
        }
    }

    pub fn calendar_year(&self) -> i32 {
        match self {
            Self::Month { year, .. } | Self::Year { year } => *year,
        }
    }

    /// First calendar day of the period
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Month { year, month } => clamped_date(*year, month.number(), 1),
            Self::Year { year } => clamped_date(*year, 1, 1),
        }
    }

    /// Last calendar day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Month { .. } => self
                .start_date()
                .checked_add_months(Months::new(1))
                .and_then(|next| next.pred_opt())
                .unwrap_or(NaiveDate::MAX),
            Self::Year { year } => clamped_date(*year, 12, 31),
        }
    }

    /// Resolve to the inclusive instant range: from the first instant of the
    /// first day through the last instant of the last day
    pub fn date_range(&self, offset: &FixedOffset) -> DateRange {
        DateRange::from_dates(self.start_date(), self.end_date(), offset)
    }

    /// Check if a calendar date falls within this period
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Human-readable label: "January 2025" or "Year 2025"
    pub fn label(&self) -> String {
        match self {
            Self::Month { year, month } => format!("{} {}", month.name(), year),
            Self::Year { year } => format!("Year {}", year),
        }
    }

    /// Get the next period of the same shape, staying put at the last
    /// representable year
    pub fn next(&self) -> Self {
        match self {
            Self::Month { year, month } => {
                if *month == MonthIndex::DECEMBER {
                    match year.checked_add(1) {
                        Some(year) => Self::Month {
                            year,
                            month: MonthIndex::JANUARY,
                        },
                        None => *self,
                    }
                } else {
                    Self::Month {
                        year: *year,
                        month: MonthIndex(month.0 + 1),
                    }
                }
            }
            Self::Year { year } => Self::Year {
                year: year.saturating_add(1),
            },
        }
    }

    /// Get the previous period of the same shape, staying put at the first
    /// representable year
    pub fn prev(&self) -> Self {
        match self {
            Self::Month { year, month } => {
                if *month == MonthIndex::JANUARY {
                    match year.checked_sub(1) {
                        Some(year) => Self::Month {
                            year,
                            month: MonthIndex::DECEMBER,
                        },
                        None => *self,
                    }
                } else {
                    Self::Month {
                        year: *year,
                        month: MonthIndex(month.0 - 1),
                    }
                }
            }
            Self::Year { year } => Self::Year {
                year: year.saturating_sub(1),
            },
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-01"
    /// - Yearly: "2025"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let invalid = || PeriodParseError::InvalidFormat(s.to_string());

        match s.split_once('-') {
            Some((year, month)) => {
                let year: i32 = year.parse().map_err(|_| invalid())?;
                let number: u32 = month.parse().map_err(|_| invalid())?;
                let month =
                    MonthIndex::from_number(number).ok_or(PeriodParseError::InvalidMonth(number))?;
                Ok(Self::Month { year, month })
            }
            None => {
                let year: i32 = s.parse().map_err(|_| invalid())?;
                Ok(Self::Year { year })
            }
        }
    }
}

/// `NaiveDate::from_ymd_opt` that pins out-of-range years to the calendar limits
fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(if year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month.number()),
            Self::Year { year } => write!(f, "{:04}", year),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}
