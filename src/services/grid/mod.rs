//! Calendar month grid construction.
//!
//! Builds the page a date picker renders: every day of the reference month,
//! padded with blank cells so the page begins on the configured first day of
//! the week and ends on the day before it.

use chrono::Weekday;

use crate::models::date::CalendarDate;
use crate::models::error::CalendarError;
use crate::models::grid::{CalendarGrid, GridCell, GridConfig, MAX_GRID_CELLS};
use crate::utils::date::{
    add_days, first_day_of_month, last_day_of_month, nearest_day_of_week, SearchDirection,
};

/// Builds `CalendarGrid`s for a fixed, validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarGridBuilder {
    config: GridConfig,
}

impl CalendarGridBuilder {
    pub fn new(config: GridConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Build the grid, taking "today" from the local clock.
    pub fn build(
        &self,
        reference_month: CalendarDate,
        selected_date: CalendarDate,
    ) -> Result<CalendarGrid, CalendarError> {
        self.build_for_today(reference_month, selected_date, CalendarDate::today())
    }

    /// Build the grid against an explicit "today".
    pub fn build_for_today(
        &self,
        reference_month: CalendarDate,
        selected_date: CalendarDate,
        today: CalendarDate,
    ) -> Result<CalendarGrid, CalendarError> {
        let first_of_month = first_day_of_month(reference_month);
        let last_of_month = last_day_of_month(reference_month);

        let mut current = nearest_day_of_week(first_of_month, Weekday::Sun, SearchDirection::Backward)?;
        let mut end = nearest_day_of_week(last_of_month, Weekday::Sat, SearchDirection::Forward)?;

        let first_day_of_week = self.config.first_day_of_week;
        if first_day_of_week != 0 {
            current = add_days(current, reanchor_offset(first_day_of_week, first_of_month))?;
            end = add_days(end, reanchor_offset(first_day_of_week, last_of_month))?;
        }

        let start = current;
        let mut cells = Vec::with_capacity(MAX_GRID_CELLS);
        while current <= end {
            cells.push(self.cell_for(current, first_of_month, selected_date, today));
            current = add_days(current, 1)?;
        }

        log::debug!(
            "Built grid for {}-{:02}: {} cells starting {} (first day of week {})",
            first_of_month.year(),
            first_of_month.month(),
            cells.len(),
            start,
            first_day_of_week
        );

        Ok(CalendarGrid::new(first_of_month, start, cells))
    }

    fn cell_for(
        &self,
        current: CalendarDate,
        first_of_month: CalendarDate,
        selected_date: CalendarDate,
        today: CalendarDate,
    ) -> GridCell {
        if !current.same_month(&first_of_month) {
            return GridCell::Blank;
        }

        GridCell::InMonth {
            date: current,
            is_today: current == today,
            is_active: current == selected_date,
            is_disabled: self.config.is_disabled(current),
        }
    }
}

/// Days to move a Sunday/Saturday-aligned boundary so the week starts on
/// `first_day_of_week` instead.
///
/// Going forward past the anchor day would drop it off the page, so in that
/// case the boundary moves back into the previous week.
fn reanchor_offset(first_day_of_week: u8, anchor: CalendarDate) -> i64 {
    let first_day_of_week = first_day_of_week as i64;
    if first_day_of_week > anchor.weekday_index() as i64 {
        first_day_of_week - 7
    } else {
        first_day_of_week
    }
}

/// Build a calendar grid in one call.
///
/// Fails with `InvalidConfiguration` when `first_day_of_week` is not in 0..=6.
pub fn build_calendar_grid(
    reference_month: CalendarDate,
    selected_date: CalendarDate,
    min_date: Option<CalendarDate>,
    max_date: Option<CalendarDate>,
    first_day_of_week: u8,
    disable_weekends: bool,
) -> Result<CalendarGrid, CalendarError> {
    let config = GridConfig {
        min_date,
        max_date,
        first_day_of_week,
        disable_weekends,
    };
    CalendarGridBuilder::new(config)?.build(reference_month, selected_date)
}
