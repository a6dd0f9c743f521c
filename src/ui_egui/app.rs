use anyhow::Result;

use crate::models::date::CalendarDate;
use crate::models::settings::PickerSettings;
use crate::services::grid::CalendarGridBuilder;
use crate::ui_egui::date_picker::{render_date_picker, DatePickerAction, DatePickerState};

const MIN_ROOT_WIDTH: f32 = 300.0;
const MIN_ROOT_HEIGHT: f32 = 320.0;

/// Minimal window hosting the date picker dialog.
pub struct DatePickerApp {
    settings: PickerSettings,
    builder: CalendarGridBuilder,
    state: DatePickerState,
    show_picker: bool,
}

impl DatePickerApp {
    pub fn new(settings: PickerSettings) -> Result<Self> {
        let builder = CalendarGridBuilder::new(settings.to_grid_config()?)?;
        log::info!(
            "Date picker configured: first_day_of_week={}, disable_weekends={}",
            builder.config().first_day_of_week,
            builder.config().disable_weekends
        );

        Ok(Self {
            settings,
            builder,
            state: DatePickerState::new(CalendarDate::today()),
            show_picker: true,
        })
    }

    pub fn native_options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([360.0, 420.0])
                .with_min_inner_size([MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]),
            ..Default::default()
        }
    }

    fn render_picker_window(&mut self, ctx: &egui::Context, today: CalendarDate) {
        let mut is_open = true;
        let mut action = DatePickerAction::None;

        egui::Window::new("📅 Select Date")
            .collapsible(false)
            .resizable(false)
            .auto_sized()
            .open(&mut is_open)
            .show(ctx, |ui| {
                action = render_date_picker(ui, &mut self.state, &self.builder, today);
            });

        match action {
            DatePickerAction::Confirmed(date) => {
                log::info!("Date confirmed: {}", date);
                self.show_picker = false;
            }
            DatePickerAction::Cancelled => self.show_picker = false,
            DatePickerAction::Selected(date) => log::debug!("Pending date: {}", date),
            DatePickerAction::None => {}
        }

        if !is_open {
            self.state.cancel();
            self.show_picker = false;
        }
    }
}

impl eframe::App for DatePickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = CalendarDate::today();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Date");
            ui.label(self.settings.format_date(self.state.confirmed()));
            ui.add_space(8.0);
            if ui.button("📅 Choose date…").clicked() {
                self.show_picker = true;
            }
        });

        if self.show_picker {
            self.render_picker_window(ctx, today);
        }
    }
}
