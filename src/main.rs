// Calendar Grid date picker
// Main entry point

use anyhow::{anyhow, Result};
use calendar_grid::models::settings::PickerSettings;
use calendar_grid::services::settings::{default_settings_path, SettingsService};
use calendar_grid::ui_egui::DatePickerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Grid date picker");

    let settings = match default_settings_path() {
        Ok(path) => {
            log::info!("Loading settings from {}", path.display());
            SettingsService::new(path).get_or_default()
        }
        Err(err) => {
            log::warn!("{:#}; using default settings", err);
            PickerSettings::default()
        }
    };

    let app = DatePickerApp::new(settings)?;

    eframe::run_native(
        "Calendar Grid",
        DatePickerApp::native_options(),
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run date picker: {}", e))
}
