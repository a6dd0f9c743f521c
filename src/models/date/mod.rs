//! Time-stripped calendar date.
//!
//! `CalendarDate` is the value every grid cell is keyed on. It carries no
//! time-of-day and no timezone, so equality is "same calendar day".

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::error::{CalendarError, ConfigProblem};

/// A timezone-naive date with no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from year, month (1-12) and day (1-31).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(ConfigProblem::InvalidDate { year, month, day })?;
        Self::try_from(date)
    }

    /// Drop the time-of-day from a timestamp.
    pub fn from_datetime(datetime: NaiveDateTime) -> Result<Self, CalendarError> {
        Self::try_from(datetime.date())
    }

    /// The current local date.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    /// Wrap a date without the range check. Only for arithmetic on dates that
    /// already passed it, where the result may land in chrono's edge years.
    pub(crate) fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Whether `date` may be accepted from outside the crate.
    ///
    /// chrono's first and last representable years are refused so the padding
    /// days around any accepted month are still representable.
    pub fn is_supported(date: NaiveDate) -> bool {
        date.year() > NaiveDate::MIN.year() && date.year() < NaiveDate::MAX.year()
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

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Weekday as an index where Sunday is 0 and Saturday is 6.
    pub fn weekday_index(&self) -> u8 {
        self.0.weekday().num_days_from_sunday() as u8
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.0.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// True when both dates fall in the same month of the same year.
    pub fn same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if Self::is_supported(date) {
            Ok(Self(date))
        } else {
            Err(ConfigProblem::OutOfRange(date).into())
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|err| {
            ConfigProblem::UnparseableDate {
                input: trimmed.to_string(),
                reason: err.to_string(),
            }
        })?;
        Self::try_from(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
