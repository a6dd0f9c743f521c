// Date arithmetic helpers
// Every helper returns a new value; inputs are never touched.

use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::models::date::CalendarDate;
use crate::models::error::{CalendarError, ConfigProblem};

/// Which way `nearest_day_of_week` walks from its starting date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// On or before the starting date.
    Backward,
    /// On or after the starting date.
    Forward,
}

/// Shift a date by `days` calendar days (negative goes back in time).
pub fn add_days(date: CalendarDate, days: i64) -> Result<CalendarDate, CalendarError> {
    let naive = date.as_naive();
    Duration::try_days(days)
        .and_then(|delta| naive.checked_add_signed(delta))
        .map(CalendarDate::from_naive)
        .ok_or_else(|| ConfigProblem::OutOfRange(naive).into())
}

/// Drop the time-of-day from a timestamp.
pub fn strip_time(datetime: NaiveDateTime) -> Result<CalendarDate, CalendarError> {
    CalendarDate::from_datetime(datetime)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Get the number of days in a given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

pub fn first_day_of_month(date: CalendarDate) -> CalendarDate {
    with_day(date, 1)
}

/// The last valid day (28-31) of the date's month.
pub fn last_day_of_month(date: CalendarDate) -> CalendarDate {
    with_day(date, days_in_month(date.year(), date.month()))
}

// Callers pass a day that exists in the date's month, so the fallback is unreachable.
fn with_day(date: CalendarDate, day: u32) -> CalendarDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), day).map_or(date, CalendarDate::from_naive)
}

/// Convert a Sunday-based index (0-6) into a `Weekday`.
pub fn weekday_from_index(index: u8) -> Result<Weekday, CalendarError> {
    match index {
        0 => Ok(Weekday::Sun),
        1 => Ok(Weekday::Mon),
        2 => Ok(Weekday::Tue),
        3 => Ok(Weekday::Wed),
        4 => Ok(Weekday::Thu),
        5 => Ok(Weekday::Fri),
        6 => Ok(Weekday::Sat),
        other => Err(ConfigProblem::FirstDayOfWeek(other).into()),
    }
}

/// Sunday-based weekday index (0-6) of a date.
pub fn weekday_index(date: CalendarDate) -> u8 {
    date.weekday_index()
}

/// Find the closest date whose weekday is `target`, walking in `direction`.
///
/// If `date` already falls on `target` it is returned unchanged.
pub fn nearest_day_of_week(
    date: CalendarDate,
    target: Weekday,
    direction: SearchDirection,
) -> Result<CalendarDate, CalendarError> {
    let current = date.weekday().num_days_from_sunday() as i64;
    let wanted = target.num_days_from_sunday() as i64;

    let offset = match direction {
        SearchDirection::Backward => -((current - wanted).rem_euclid(7)),
        SearchDirection::Forward => (wanted - current).rem_euclid(7),
    };

    add_days(date, offset)
}

/// Shift a date by the given number of months, clamping the day.
///
/// Fails with `OutOfRange` when the target month is not a supported date.
pub fn shift_month(date: CalendarDate, delta: i32) -> Result<CalendarDate, CalendarError> {
    let out_of_range = || CalendarError::from(ConfigProblem::OutOfRange(date.as_naive()));
    let total_months = (date.year() * 12 + date.month() as i32 - 1)
        .checked_add(delta)
        .ok_or_else(out_of_range)?;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = date.day().min(days_in_month(new_year, new_month));
    CalendarDate::from_ymd(new_year, new_month, day).map_err(|_| out_of_range())
}

/// Shift a date by whole years, clamping Feb 29 to Feb 28 when needed.
pub fn shift_year(date: CalendarDate, delta: i32) -> Result<CalendarDate, CalendarError> {
    let months = delta
        .checked_mul(12)
        .ok_or(ConfigProblem::OutOfRange(date.as_naive()))?;
    shift_month(date, months)
}
