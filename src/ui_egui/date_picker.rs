//! Calendar-month date picker widget.
//!
//! Renders a `CalendarGrid` as a seven-column page and reports which date the
//! user picked. The grid itself is rebuilt every frame from the picker state.

use chrono::Weekday;
use egui::{Color32, RichText};

use crate::models::date::CalendarDate;
use crate::models::error::CalendarError;
use crate::models::grid::{CalendarGrid, GridCell, DAYS_PER_WEEK};
use crate::services::grid::CalendarGridBuilder;
use crate::utils::date::{first_day_of_month, shift_month, shift_year};

const DAY_NAMES: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const TODAY_COLOR: Color32 = Color32::from_rgb(50, 150, 50);

/// Result from the date picker for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePickerAction {
    /// No action taken
    None,
    /// User clicked a day; it is pending until confirmed
    Selected(CalendarDate),
    /// User accepted the pending date
    Confirmed(CalendarDate),
    /// User backed out; the pending date was reverted
    Cancelled,
}

/// Month being viewed plus the pending and confirmed selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    viewing_month: CalendarDate,
    pending: CalendarDate,
    confirmed: CalendarDate,
}

impl DatePickerState {
    pub fn new(initial: CalendarDate) -> Self {
        Self {
            viewing_month: first_day_of_month(initial),
            pending: initial,
            confirmed: initial,
        }
    }

    pub fn viewing_month(&self) -> CalendarDate {
        self.viewing_month
    }

    pub fn pending(&self) -> CalendarDate {
        self.pending
    }

    pub fn confirmed(&self) -> CalendarDate {
        self.confirmed
    }

    pub fn previous_month(&mut self) {
        self.navigate(shift_month(self.viewing_month, -1));
    }

    pub fn next_month(&mut self) {
        self.navigate(shift_month(self.viewing_month, 1));
    }

    pub fn previous_year(&mut self) {
        self.navigate(shift_year(self.viewing_month, -1));
    }

    pub fn next_year(&mut self) {
        self.navigate(shift_year(self.viewing_month, 1));
    }

    // Past the last supported month the page stays where it is.
    fn navigate(&mut self, shifted: Result<CalendarDate, CalendarError>) {
        match shifted {
            Ok(month) => self.viewing_month = month,
            Err(err) => log::warn!("Staying on {}: {}", self.viewing_month, err),
        }
    }

    pub fn show_month_of(&mut self, date: CalendarDate) {
        self.viewing_month = first_day_of_month(date);
    }

    pub fn select(&mut self, date: CalendarDate) {
        self.pending = date;
        self.viewing_month = first_day_of_month(date);
    }

    pub fn confirm(&mut self) -> CalendarDate {
        self.confirmed = self.pending;
        self.confirmed
    }

    pub fn cancel(&mut self) {
        self.pending = self.confirmed;
        self.viewing_month = first_day_of_month(self.confirmed);
    }
}

/// Weekday header labels rotated so the first column is `first`.
pub fn weekday_labels(first: Weekday) -> [&'static str; DAYS_PER_WEEK] {
    let mut labels = DAY_NAMES;
    labels.rotate_left(first.num_days_from_sunday() as usize);
    labels
}

/// Lay a grid out as a seven-column page headed by the weekday of its first
/// cell.
///
/// `on_select` fires only for enabled in-month days. Returns the screen rect
/// of every in-month day as laid out this frame.
pub fn render_calendar_month(
    ui: &mut egui::Ui,
    id_salt: &str,
    grid: &CalendarGrid,
    mut on_select: impl FnMut(CalendarDate),
) -> Vec<(CalendarDate, egui::Rect)> {
    let mut day_rects = Vec::with_capacity(grid.len());

    egui::Grid::new(("calendar_month", id_salt))
        .num_columns(DAYS_PER_WEEK)
        .spacing([2.0, 2.0])
        .min_col_width(24.0)
        .show(ui, |ui| {
            for name in weekday_labels(grid.start().weekday()) {
                ui.label(RichText::new(name).small().strong());
            }
            ui.end_row();

            for week in grid.weeks() {
                for cell in week {
                    match *cell {
                        GridCell::Blank => {
                            ui.label("");
                        }
                        GridCell::InMonth {
                            date,
                            is_today,
                            is_active,
                            is_disabled,
                        } => {
                            let day_str = date.day().to_string();
                            let text = if is_disabled {
                                RichText::new(day_str).weak().strikethrough()
                            } else if is_today {
                                RichText::new(day_str).strong().color(TODAY_COLOR)
                            } else {
                                RichText::new(day_str)
                            };

                            let response =
                                ui.add_enabled(!is_disabled, egui::SelectableLabel::new(is_active, text));
                            if response.clicked() && !is_disabled {
                                on_select(date);
                            }
                            day_rects.push((date, response.rect));
                        }
                    }
                }
                ui.end_row();
            }
        });

    day_rects
}

/// Render the full picker: navigation header, month page and actions.
pub fn render_date_picker(
    ui: &mut egui::Ui,
    state: &mut DatePickerState,
    builder: &CalendarGridBuilder,
    today: CalendarDate,
) -> DatePickerAction {
    let mut action = DatePickerAction::None;

    ui.vertical(|ui| {
        ui.set_max_width(240.0);

        ui.horizontal(|ui| {
            if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
                state.previous_year();
            }
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                state.previous_month();
            }

            let header = state.viewing_month().as_naive().format("%B %Y").to_string();
            ui.add_space(4.0);
            if ui.selectable_label(false, header).on_hover_text("Go to today").clicked() {
                state.show_month_of(today);
            }
            ui.add_space(4.0);

            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                state.next_month();
            }
            if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
                state.next_year();
            }
        });

        ui.separator();

        match builder.build_for_today(state.viewing_month(), state.pending(), today) {
            Ok(grid) => {
                render_calendar_month(ui, "picker", &grid, |date| {
                    state.select(date);
                    action = DatePickerAction::Selected(date);
                });
            }
            Err(err) => {
                log::error!("Failed to build calendar grid: {}", err);
                ui.colored_label(Color32::RED, err.to_string());
            }
        }

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Today").clicked() {
                // Only select today if it's not disabled
                if builder.config().is_disabled(today) {
                    state.show_month_of(today);
                } else {
                    state.select(today);
                    action = DatePickerAction::Selected(today);
                }
            }
            if ui.button("Cancel").clicked() {
                state.cancel();
                action = DatePickerAction::Cancelled;
            }
            if ui.button("OK").clicked() {
                action = DatePickerAction::Confirmed(state.confirm());
            }
        });
    });

    action
}
