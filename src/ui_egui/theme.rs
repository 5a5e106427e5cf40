//! Theme module for the demo window
//!
//! Defines the CalendarTheme structure and applies it to the egui context.

use crate::models::settings::ThemePreference;
use egui::Color32;

/// Colors used by the panel and the calendar surface
#[derive(Debug, Clone)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Calendar grid background color
    pub calendar_background: Color32,

    /// Outline drawn around cells when the grid is visible
    pub grid_line: Color32,

    /// Background of the selected date
    pub selected_background: Color32,

    /// Text color used when no text style sets one
    pub text_primary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            calendar_background: Color32::from_rgb(255, 255, 255),
            grid_line: Color32::from_rgb(200, 200, 200),
            selected_background: Color32::from_rgb(190, 215, 255),
            text_primary: Color32::from_rgb(40, 40, 40),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            calendar_background: Color32::from_rgb(40, 40, 40),
            grid_line: Color32::from_rgb(70, 70, 70),
            selected_background: Color32::from_rgb(50, 70, 110),
            text_primary: Color32::from_rgb(240, 240, 240),
        }
    }

    /// Resolve a configured preference, asking the OS for `System`
    pub fn for_preference(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
            ThemePreference::System => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.extreme_bg_color = self.calendar_background;
        visuals.selection.bg_fill = self.selected_background;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = CalendarTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = CalendarTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_explicit_preferences() {
        assert!(CalendarTheme::for_preference(ThemePreference::Dark).is_dark);
        assert!(!CalendarTheme::for_preference(ThemePreference::Light).is_dark);
    }
}
