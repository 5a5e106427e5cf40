//! Calendar display model.
//!
//! `CalendarDisplay` holds every property of the calendar surface: locale,
//! header formats, date bounds, the selected date, the shown month page and
//! the text styles. Mutations that move the selection or the shown page
//! queue a [`CalendarSignal`] which the owner drains with
//! [`CalendarDisplay::take_signals`].

mod formats;

pub use formats::{CalendarSignal, HorizontalHeaderFormat, SelectionMode, VerticalHeaderFormat};

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::locale::DisplayLocale;
use crate::models::text_style::{NamedColor, TextStyle};
use crate::utils::date::{clamp_date, page_of, shift_page};

/// Earliest date the calendar accepts unless configured otherwise
pub fn default_minimum_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1752, 9, 14).unwrap_or(NaiveDate::MIN)
}

/// Latest date the calendar accepts unless configured otherwise
pub fn default_maximum_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub struct CalendarDisplay {
    locale: DisplayLocale,
    first_day_of_week: Weekday,
    selection_mode: SelectionMode,
    horizontal_header: HorizontalHeaderFormat,
    vertical_header: VerticalHeaderFormat,
    grid_visible: bool,
    navigation_bar_visible: bool,
    minimum_date: NaiveDate,
    maximum_date: NaiveDate,
    selected_date: NaiveDate,
    /// Shown month page as (year, month)
    shown_page: (i32, u32),
    weekday_styles: HashMap<Weekday, TextStyle>,
    /// Per-date overrides; plain styles are never stored
    date_styles: BTreeMap<NaiveDate, TextStyle>,
    header_style: TextStyle,
    signals: Vec<CalendarSignal>,
}

impl CalendarDisplay {
    /// Create a calendar showing and selecting `today`.
    pub fn new(today: NaiveDate) -> Self {
        let locale = DisplayLocale::default();
        let minimum_date = default_minimum_date();
        let maximum_date = default_maximum_date();
        let selected_date = clamp_date(today, minimum_date, maximum_date);

        let mut weekday_styles = HashMap::new();
        weekday_styles.insert(Weekday::Sat, TextStyle::with_foreground(NamedColor::Red));
        weekday_styles.insert(Weekday::Sun, TextStyle::with_foreground(NamedColor::Red));

        Self {
            locale,
            first_day_of_week: locale.first_day_of_week(),
            selection_mode: SelectionMode::default(),
            horizontal_header: HorizontalHeaderFormat::default(),
            vertical_header: VerticalHeaderFormat::default(),
            grid_visible: false,
            navigation_bar_visible: true,
            minimum_date,
            maximum_date,
            selected_date,
            shown_page: page_of(selected_date),
            weekday_styles,
            date_styles: BTreeMap::new(),
            header_style: TextStyle::plain(),
            signals: Vec::new(),
        }
    }

    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: DisplayLocale) {
        self.locale = locale;
    }

    pub fn first_day_of_week(&self) -> Weekday {
        self.first_day_of_week
    }

    pub fn set_first_day_of_week(&mut self, day: Weekday) {
        self.first_day_of_week = day;
    }

    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection_mode = mode;
    }

    pub fn horizontal_header_format(&self) -> HorizontalHeaderFormat {
        self.horizontal_header
    }

    pub fn set_horizontal_header_format(&mut self, format: HorizontalHeaderFormat) {
        self.horizontal_header = format;
    }

    pub fn vertical_header_format(&self) -> VerticalHeaderFormat {
        self.vertical_header
    }

    pub fn set_vertical_header_format(&mut self, format: VerticalHeaderFormat) {
        self.vertical_header = format;
    }

    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn set_grid_visible(&mut self, visible: bool) {
        self.grid_visible = visible;
    }

    pub fn is_navigation_bar_visible(&self) -> bool {
        self.navigation_bar_visible
    }

    pub fn set_navigation_bar_visible(&mut self, visible: bool) {
        self.navigation_bar_visible = visible;
    }

    pub fn minimum_date(&self) -> NaiveDate {
        self.minimum_date
    }

    pub fn maximum_date(&self) -> NaiveDate {
        self.maximum_date
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Set the lower bound. A bound above the maximum raises the maximum.
    pub fn set_minimum_date(&mut self, date: NaiveDate) {
        if date == self.minimum_date {
            return;
        }
        self.minimum_date = date;
        if self.maximum_date < date {
            self.maximum_date = date;
        }
        self.enforce_range();
    }

    /// Set the upper bound. A bound below the minimum lowers the minimum.
    pub fn set_maximum_date(&mut self, date: NaiveDate) {
        if date == self.maximum_date {
            return;
        }
        self.maximum_date = date;
        if self.minimum_date > date {
            self.minimum_date = date;
        }
        self.enforce_range();
    }

    pub fn is_date_enabled(&self, date: NaiveDate) -> bool {
        date >= self.minimum_date && date <= self.maximum_date
    }

    /// Select a date (clamped into the bounds) and show its month.
    pub fn set_selected_date(&mut self, date: NaiveDate) {
        let date = clamp_date(date, self.minimum_date, self.maximum_date);
        if date != self.selected_date {
            self.selected_date = date;
            self.signals.push(CalendarSignal::SelectionChanged(date));
        }
        let (year, month) = page_of(date);
        self.set_current_page(year, month);
    }

    /// Handle a user click on a grid cell. Returns whether it selected the date.
    pub fn click_date(&mut self, date: NaiveDate) -> bool {
        if self.selection_mode == SelectionMode::NoSelection || !self.is_date_enabled(date) {
            return false;
        }
        self.set_selected_date(date);
        true
    }

    pub fn year_shown(&self) -> i32 {
        self.shown_page.0
    }

    pub fn month_shown(&self) -> u32 {
        self.shown_page.1
    }

    /// Show a month page, clamped to the pages covered by the bounds.
    pub fn set_current_page(&mut self, year: i32, month: u32) {
        let min_page = page_of(self.minimum_date);
        let max_page = page_of(self.maximum_date);
        let month = month.clamp(1, 12);
        let page = (year, month).clamp(min_page, max_page);
        if page != self.shown_page {
            self.shown_page = page;
            self.signals.push(CalendarSignal::CurrentPageChanged {
                year: page.0,
                month: page.1,
            });
        }
    }

    pub fn show_next_month(&mut self) {
        self.shift_shown_page(1);
    }

    pub fn show_previous_month(&mut self) {
        self.shift_shown_page(-1);
    }

    pub fn show_next_year(&mut self) {
        self.shift_shown_page(12);
    }

    pub fn show_previous_year(&mut self) {
        self.shift_shown_page(-12);
    }

    pub fn can_show_previous_month(&self) -> bool {
        self.shown_page > page_of(self.minimum_date)
    }

    pub fn can_show_next_month(&self) -> bool {
        self.shown_page < page_of(self.maximum_date)
    }

    pub fn weekday_text_style(&self, day: Weekday) -> TextStyle {
        self.weekday_styles.get(&day).copied().unwrap_or_default()
    }

    pub fn set_weekday_text_style(&mut self, day: Weekday, style: TextStyle) {
        self.weekday_styles.insert(day, style);
    }

    pub fn date_text_style(&self, date: NaiveDate) -> TextStyle {
        self.date_styles.get(&date).copied().unwrap_or_default()
    }

    /// Set a per-date override. A plain style removes the override.
    pub fn set_date_text_style(&mut self, date: NaiveDate, style: TextStyle) {
        if style.is_plain() {
            self.date_styles.remove(&date);
        } else {
            self.date_styles.insert(date, style);
        }
    }

    #[cfg(test)]
    pub(crate) fn date_text_styles(&self) -> impl Iterator<Item = (&NaiveDate, &TextStyle)> {
        self.date_styles.iter()
    }

    pub fn header_text_style(&self) -> TextStyle {
        self.header_style
    }

    pub fn set_header_text_style(&mut self, style: TextStyle) {
        self.header_style = style;
    }

    /// Effective style of a grid cell: weekday style with the date override on top.
    pub fn style_for_date(&self, date: NaiveDate) -> TextStyle {
        self.weekday_text_style(date.weekday())
            .merged_with(&self.date_text_style(date))
    }

    /// Effective style of a day-name header: header style tinted with the weekday color.
    pub fn header_style_for(&self, day: Weekday) -> TextStyle {
        let tint = TextStyle {
            foreground: self.weekday_text_style(day).foreground,
            ..TextStyle::default()
        };
        self.header_style.merged_with(&tint)
    }

    /// Drain the notifications queued since the last call.
    pub fn take_signals(&mut self) -> Vec<CalendarSignal> {
        std::mem::take(&mut self.signals)
    }

    fn shift_shown_page(&mut self, delta_months: i32) {
        let (year, month) = shift_page(self.shown_page.0, self.shown_page.1, delta_months);
        self.set_current_page(year, month);
    }

    fn enforce_range(&mut self) {
        let clamped = clamp_date(self.selected_date, self.minimum_date, self.maximum_date);
        if clamped != self.selected_date {
            self.selected_date = clamped;
            self.signals.push(CalendarSignal::SelectionChanged(clamped));
        }
        let (year, month) = self.shown_page;
        self.set_current_page(year, month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> CalendarDisplay {
        CalendarDisplay::new(date(2026, 10, 19))
    }

    #[test]
    fn test_defaults() {
        let cal = calendar();
        assert_eq!(cal.selected_date(), date(2026, 10, 19));
        assert_eq!((cal.year_shown(), cal.month_shown()), (2026, 10));
        assert_eq!(cal.minimum_date(), default_minimum_date());
        assert_eq!(cal.maximum_date(), default_maximum_date());
        assert_eq!(cal.selection_mode(), SelectionMode::SingleSelection);
        assert_eq!(cal.horizontal_header_format(), HorizontalHeaderFormat::ShortDayNames);
        assert_eq!(cal.vertical_header_format(), VerticalHeaderFormat::IsoWeekNumbers);
        assert!(!cal.is_grid_visible());
        assert!(cal.is_navigation_bar_visible());
        assert_eq!(
            cal.weekday_text_style(Weekday::Sun).foreground,
            Some(NamedColor::Red)
        );
        assert!(cal.weekday_text_style(Weekday::Wed).is_plain());
    }

    #[test]
    fn test_minimum_above_maximum_raises_maximum() {
        let mut cal = calendar();
        cal.set_maximum_date(date(2000, 1, 1));
        cal.take_signals();

        cal.set_minimum_date(date(2100, 6, 1));

        assert_eq!(cal.minimum_date(), date(2100, 6, 1));
        assert_eq!(cal.maximum_date(), date(2100, 6, 1));
        assert_eq!(cal.selected_date(), date(2100, 6, 1));
        assert_eq!(
            cal.take_signals(),
            vec![
                CalendarSignal::SelectionChanged(date(2100, 6, 1)),
                CalendarSignal::CurrentPageChanged { year: 2100, month: 6 },
            ]
        );
    }

    #[test]
    fn test_maximum_below_minimum_lowers_minimum() {
        let mut cal = calendar();
        cal.set_minimum_date(date(1950, 1, 1));
        cal.set_maximum_date(date(1900, 3, 3));
        assert_eq!(cal.minimum_date(), date(1900, 3, 3));
        assert_eq!(cal.maximum_date(), date(1900, 3, 3));
        assert_eq!(cal.selected_date(), date(1900, 3, 3));
    }

    #[test]
    fn test_bounds_inside_range_keep_selection() {
        let mut cal = calendar();
        cal.set_minimum_date(date(2000, 1, 1));
        cal.set_maximum_date(date(2030, 1, 1));
        assert_eq!(cal.selected_date(), date(2026, 10, 19));
        assert!(cal.take_signals().is_empty());
    }

    #[test]
    fn test_set_selected_date_moves_page() {
        let mut cal = calendar();
        cal.set_selected_date(date(2027, 5, 3));
        assert_eq!(
            cal.take_signals(),
            vec![
                CalendarSignal::SelectionChanged(date(2027, 5, 3)),
                CalendarSignal::CurrentPageChanged { year: 2027, month: 5 },
            ]
        );

        // Same date again is silent
        cal.set_selected_date(date(2027, 5, 3));
        assert!(cal.take_signals().is_empty());
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut cal = calendar();
        cal.set_maximum_date(date(2026, 12, 31));
        cal.set_selected_date(date(2030, 1, 1));
        assert_eq!(cal.selected_date(), date(2026, 12, 31));
    }

    #[test]
    fn test_page_navigation_is_clamped() {
        let mut cal = calendar();
        cal.set_maximum_date(date(2026, 11, 15));
        cal.take_signals();

        cal.show_next_month();
        assert_eq!((cal.year_shown(), cal.month_shown()), (2026, 11));
        assert!(!cal.can_show_next_month());

        cal.show_next_year();
        assert_eq!((cal.year_shown(), cal.month_shown()), (2026, 11));
        assert_eq!(
            cal.take_signals(),
            vec![CalendarSignal::CurrentPageChanged { year: 2026, month: 11 }]
        );

        cal.show_previous_year();
        assert_eq!((cal.year_shown(), cal.month_shown()), (2025, 11));
        assert!(cal.can_show_previous_month());
    }

    #[test]
    fn test_click_respects_selection_mode_and_bounds() {
        let mut cal = calendar();
        cal.set_selection_mode(SelectionMode::NoSelection);
        assert!(!cal.click_date(date(2026, 10, 1)));
        assert_eq!(cal.selected_date(), date(2026, 10, 19));

        cal.set_selection_mode(SelectionMode::SingleSelection);
        cal.set_minimum_date(date(2026, 10, 10));
        assert!(!cal.click_date(date(2026, 10, 1)));
        assert!(cal.click_date(date(2026, 10, 12)));
        assert_eq!(cal.selected_date(), date(2026, 10, 12));
    }

    #[test]
    fn test_plain_date_style_removes_override() {
        let mut cal = calendar();
        let may_first = date(2026, 5, 1);
        cal.set_date_text_style(may_first, TextStyle::with_foreground(NamedColor::Red));
        assert_eq!(cal.date_text_styles().count(), 1);

        cal.set_date_text_style(may_first, TextStyle::plain());
        assert_eq!(cal.date_text_styles().count(), 0);
        assert!(cal.date_text_style(may_first).is_plain());
    }

    #[test]
    fn test_effective_styles() {
        let mut cal = calendar();
        cal.set_header_text_style(TextStyle::bold());
        let saturday = date(2026, 10, 17);
        cal.set_date_text_style(saturday, TextStyle::italic());

        let cell = cal.style_for_date(saturday);
        assert_eq!(cell.foreground, Some(NamedColor::Red));
        assert!(cell.is_italic());

        let header = cal.header_style_for(Weekday::Sat);
        assert!(header.is_bold());
        assert_eq!(header.foreground, Some(NamedColor::Red));
        assert_eq!(cal.header_style_for(Weekday::Tue), TextStyle::bold());
    }
}
