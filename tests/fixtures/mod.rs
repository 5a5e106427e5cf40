// Test fixtures - reusable test data
// Provides consistent dates and panels across all test files

#![allow(dead_code)]

use calendar_widget_demo::models::locale::DisplayLocale;
use calendar_widget_demo::ui_egui::ConfigPanel;
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Oct 19, 2026, used as "today"
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    /// Returns Jan 1, 1900 (date field lower bound)
    pub fn range_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
    }

    /// Returns Jan 1, 3000 (date field upper bound)
    pub fn range_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(3000, 1, 1).unwrap()
    }

    /// Returns May 1 of the given year
    pub fn may_first(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 5, 1).unwrap()
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Panels in known states
pub mod panels {
    use super::*;

    /// Panel built for `dates::today()` with the C locale
    pub fn default_panel() -> ConfigPanel {
        ConfigPanel::new(dates::today(), DisplayLocale::default())
    }

    /// Index of a locale code in the panel's locale control
    pub fn locale_index(panel: &ConfigPanel, code: &str) -> usize {
        let locale = DisplayLocale::from_code(code).expect("known locale code");
        panel
            .locales()
            .find_value(locale)
            .expect("locale listed in the control")
    }
}
