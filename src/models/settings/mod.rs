// Settings module
// Read-only launch configuration for the demo window

use serde::Deserialize;
use thiserror::Error;

/// Which visual theme to apply on launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    /// Follow the operating system preference
    System,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Preferred locale code, e.g. "ru_RU"; falls back to the environment
    pub locale: Option<String>,
    pub theme: ThemePreference,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: None,
            theme: ThemePreference::Light,
            window_width: 820.0,
            window_height: 560.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsValidationError {
    #[error("window width must be a positive number, got {0}")]
    InvalidWidth(f32),
    #[error("window height must be a positive number, got {0}")]
    InvalidHeight(f32),
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !self.window_width.is_finite() || self.window_width <= 0.0 {
            return Err(SettingsValidationError::InvalidWidth(self.window_width));
        }
        if !self.window_height.is_finite() || self.window_height <= 0.0 {
            return Err(SettingsValidationError::InvalidHeight(self.window_height));
        }
        Ok(())
    }
}
