use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::PickerSettings;

const SETTINGS_FILE: &str = "settings.toml";

/// Resolve `<config dir>/calendar-grid/settings.toml` for the current user.
pub fn default_settings_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "calendar-grid")
        .context("Failed to resolve the user configuration directory")?;
    Ok(dirs.config_dir().join(SETTINGS_FILE))
}

/// Loads and stores picker settings as a TOML file.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; a missing file yields the defaults.
    pub fn get(&self) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::debug!("No settings at {}, using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings in {}: {}", self.path.display(), e))?;

        Ok(settings)
    }

    /// Like `get`, but falls back to defaults when the file is unusable.
    pub fn get_or_default(&self) -> PickerSettings {
        match self.get() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}; falling back to default settings", err);
                PickerSettings::default()
            }
        }
    }

    /// Update settings
    pub fn update(&self, settings: &PickerSettings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        self.update(&PickerSettings::default())
    }
}
