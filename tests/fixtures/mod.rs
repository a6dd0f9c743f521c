// Test fixtures - reusable test data
// Provides consistent dates and builders across all test files

#![allow(dead_code)]

use calendar_grid::models::date::CalendarDate;
use calendar_grid::models::grid::{CalendarGrid, GridConfig};
use calendar_grid::services::grid::CalendarGridBuilder;

/// Shorthand for a known-valid date.
pub fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("fixture date must be valid")
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Feb 1, 2024 (a Thursday, first day of a leap February)
    pub fn feb_1_2024() -> CalendarDate {
        date(2024, 2, 1)
    }

    /// Feb 14, 2024
    pub fn valentine_2024() -> CalendarDate {
        date(2024, 2, 14)
    }

    /// Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> CalendarDate {
        date(2024, 2, 29)
    }

    /// A "today" far from every fixture month so no cell is flagged today
    pub fn unrelated_today() -> CalendarDate {
        date(1999, 7, 15)
    }
}

/// Build a grid with a fixed "today" so results never depend on the clock.
pub fn grid_for(config: GridConfig, reference: CalendarDate, selected: CalendarDate) -> CalendarGrid {
    CalendarGridBuilder::new(config)
        .expect("fixture config must be valid")
        .build_for_today(reference, selected, dates::unrelated_today())
        .expect("fixture grid must build")
}

/// Dates of the in-month cells flagged disabled, in grid order.
pub fn disabled_days(grid: &CalendarGrid) -> Vec<u32> {
    grid.in_month_cells()
        .filter(|cell| cell.is_disabled())
        .filter_map(|cell| cell.date())
        .map(|date| date.day())
        .collect()
}
