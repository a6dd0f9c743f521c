//! Calendar grid model.
//!
//! A `CalendarGrid` is purely derived data: it is rebuilt from scratch whenever
//! the reference month, selection, bounds or weekday settings change.

use serde::{Deserialize, Serialize};

use crate::models::date::CalendarDate;
use crate::models::error::CalendarError;
use crate::utils::date::weekday_from_index;

/// Days per grid row.
pub const DAYS_PER_WEEK: usize = 7;
/// Upper bound on grid length (six weeks).
pub const MAX_GRID_CELLS: usize = 6 * DAYS_PER_WEEK;

/// One cell of a calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridCell {
    /// A day belonging to the reference month.
    InMonth {
        date: CalendarDate,
        is_today: bool,
        is_active: bool,
        is_disabled: bool,
    },
    /// Placeholder for a day of the previous or next month.
    Blank,
}

impl GridCell {
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::InMonth { date, .. } => Some(*date),
            Self::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    pub fn is_today(&self) -> bool {
        matches!(self, Self::InMonth { is_today: true, .. })
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::InMonth { is_active: true, .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::InMonth { is_disabled: true, .. })
    }

    /// Whether a user may pick this cell.
    pub fn is_selectable(&self) -> bool {
        matches!(
            self,
            Self::InMonth {
                is_disabled: false,
                ..
            }
        )
    }
}

/// Knobs that shape a grid independent of the month shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridConfig {
    /// Dates before this are disabled (inclusive bound).
    pub min_date: Option<CalendarDate>,
    /// Dates after this are disabled (inclusive bound).
    pub max_date: Option<CalendarDate>,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub disable_weekends: bool,
}

impl GridConfig {
    pub fn with_bounds(mut self, min_date: Option<CalendarDate>, max_date: Option<CalendarDate>) -> Self {
        self.min_date = min_date;
        self.max_date = max_date;
        self
    }

    pub fn with_first_day_of_week(mut self, first_day_of_week: u8) -> Self {
        self.first_day_of_week = first_day_of_week;
        self
    }

    pub fn with_disabled_weekends(mut self, disable_weekends: bool) -> Self {
        self.disable_weekends = disable_weekends;
        self
    }

    /// Check the configuration. A `min_date` after `max_date` is accepted and
    /// simply disables every day.
    pub fn validate(&self) -> Result<(), CalendarError> {
        weekday_from_index(self.first_day_of_week)?;
        Ok(())
    }

    /// Whether `date` is disabled by bounds or the weekend rule.
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        let before_min = self.min_date.map_or(false, |min| date < min);
        let after_max = self.max_date.map_or(false, |max| date > max);
        let weekend = self.disable_weekends && date.is_weekend();
        before_min || after_max || weekend
    }
}

/// An ordered, row-aligned page of day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    reference_month: CalendarDate,
    start: CalendarDate,
    cells: Vec<GridCell>,
}

impl CalendarGrid {
    pub(crate) fn new(reference_month: CalendarDate, start: CalendarDate, cells: Vec<GridCell>) -> Self {
        Self {
            reference_month,
            start,
            cells,
        }
    }

    /// First day of the month this grid shows.
    pub fn reference_month(&self) -> CalendarDate {
        self.reference_month
    }

    /// Date at the grid's first position (may belong to the previous month).
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    /// Rows of seven cells, in display order.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn in_month_cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| !cell.is_blank())
    }

    /// Locate the in-month cell for `date`.
    pub fn find(&self, date: CalendarDate) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.date() == Some(date))
    }

    /// Dates a user may pick on this page.
    pub fn selectable_dates(&self) -> Vec<CalendarDate> {
        self.cells
            .iter()
            .filter(|cell| cell.is_selectable())
            .filter_map(GridCell::date)
            .collect()
    }

    pub fn today(&self) -> Option<CalendarDate> {
        self.cells.iter().find(|cell| cell.is_today()).and_then(GridCell::date)
    }

    pub fn active(&self) -> Option<CalendarDate> {
        self.cells.iter().find(|cell| cell.is_active()).and_then(GridCell::date)
    }
}
