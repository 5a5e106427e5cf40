use crate::models::locale::DisplayLocale;
use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service reading `settings.toml` from the platform config directory.
    pub fn from_default_location() -> Option<Self> {
        ProjectDirs::from("com", "CalendarWidget", "CalendarWidgetDemo")
            .map(|dirs| Self::new(dirs.config_dir().join(SETTINGS_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            log::debug!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(Settings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Preferred locale: the configured code, then the system locale, then the default.
    pub fn preferred_locale(settings: &Settings) -> DisplayLocale {
        if let Some(code) = settings.locale.as_deref() {
            match DisplayLocale::from_code(code) {
                Ok(locale) => return locale,
                Err(e) => log::warn!("Ignoring configured locale: {}", e),
            }
        }
        DisplayLocale::from_system().unwrap_or_default()
    }
}
