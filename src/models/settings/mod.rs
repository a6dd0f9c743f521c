// Settings module
// Persisted date picker preferences; converted into a typed GridConfig on use.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::models::date::CalendarDate;
use crate::models::error::{CalendarError, ConfigProblem};
use crate::models::grid::GridConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    pub first_day_of_week: u8,
    pub disable_weekends: bool,
    /// Earliest pickable date, `YYYY-MM-DD`
    pub min_date: Option<String>,
    /// Latest pickable date, `YYYY-MM-DD`
    pub max_date: Option<String>,
    /// chrono strftime pattern used to show the confirmed date
    pub date_format: String,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            disable_weekends: false,
            min_date: None,
            max_date: None,
            date_format: "%A, %B %-d, %Y".to_string(),
        }
    }
}

impl PickerSettings {
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.to_grid_config()?;

        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigProblem::DateFormat(self.date_format.clone()).into());
        }

        Ok(())
    }

    /// Parse the stored strings into a validated `GridConfig`.
    pub fn to_grid_config(&self) -> Result<GridConfig, CalendarError> {
        let config = GridConfig {
            min_date: parse_optional_date(self.min_date.as_deref())?,
            max_date: parse_optional_date(self.max_date.as_deref())?,
            first_day_of_week: self.first_day_of_week,
            disable_weekends: self.disable_weekends,
        };
        config.validate()?;
        Ok(config)
    }

    /// Format a date with the configured pattern.
    ///
    /// Call `validate` first; an invalid pattern falls back to ISO format.
    pub fn format_date(&self, date: CalendarDate) -> String {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return date.to_string();
        }
        date.as_naive().format(&self.date_format).to_string()
    }
}

fn parse_optional_date(value: Option<&str>) -> Result<Option<CalendarDate>, CalendarError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse().map(Some),
    }
}
