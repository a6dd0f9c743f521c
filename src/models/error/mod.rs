//! Error types for calendar grid construction.
//!
//! Every failure the core can report is a configuration problem: the grid
//! computation itself is total over valid inputs.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised by the calendar grid core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigProblem),
}

/// What exactly was wrong with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigProblem {
    #[error("first day of week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    FirstDayOfWeek(u8),

    #[error("could not parse date '{input}': {reason}")]
    UnparseableDate { input: String, reason: String },

    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("date {0} is outside the supported range")]
    OutOfRange(NaiveDate),

    #[error("invalid date format '{0}'")]
    DateFormat(String),
}

impl CalendarError {
    /// The underlying problem, for callers that want to branch on it.
    pub fn problem(&self) -> &ConfigProblem {
        match self {
            Self::InvalidConfiguration(problem) => problem,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_day_of_week_message() {
        let err = CalendarError::from(ConfigProblem::FirstDayOfWeek(9));
        assert_eq!(
            err.to_string(),
            "invalid configuration: first day of week must be between 0 (Sunday) and 6 (Saturday), got 9"
        );
    }

    #[test]
    fn test_invalid_date_message_is_zero_padded() {
        let err = CalendarError::from(ConfigProblem::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        });
        assert_eq!(err.to_string(), "invalid configuration: 2023-02-29 is not a calendar date");
    }

    #[test]
    fn test_problem_accessor() {
        let err = CalendarError::from(ConfigProblem::DateFormat("%Q".into()));
        assert_eq!(err.problem(), &ConfigProblem::DateFormat("%Q".into()));
    }
}
