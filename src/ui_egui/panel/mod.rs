//! Display configuration panel.
//!
//! Owns the calendar display and every control of the demo window and keeps
//! them consistent. All input arrives as [`PanelEvent`]s. Handling an event
//! runs a fixed set of directional update rules through a FIFO queue: a rule
//! that moves another control enqueues that control's event, and calendar
//! notifications are drained after every step. Events that leave their
//! control unchanged do nothing, which keeps handling idempotent and
//! guarantees the queue drains.

pub mod options;
mod render;

pub use options::{DateField, OptionTable};
pub use render::render_config_panel;

use std::collections::VecDeque;

use chrono::{NaiveDate, Weekday};

use crate::models::calendar::{
    CalendarDisplay, CalendarSignal, HorizontalHeaderFormat, SelectionMode, VerticalHeaderFormat,
};
use crate::models::locale::DisplayLocale;
use crate::models::text_style::{NamedColor, TextStyle};

/// Upper bound on queued follow-up events per handled event
const MAX_RULE_STEPS: usize = 64;

/// Valid range of the date fields
pub fn date_field_minimum() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub fn date_field_maximum() -> NaiveDate {
    NaiveDate::from_ymd_opt(3000, 1, 1).unwrap_or(NaiveDate::MAX)
}

const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];
const WEEKEND: [Weekday; 2] = [Weekday::Sat, Weekday::Sun];

/// Input to the panel: control changes and calendar interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    LocaleSelected(usize),
    FirstDaySelected(usize),
    SelectionModeSelected(usize),
    HorizontalHeaderSelected(usize),
    VerticalHeaderSelected(usize),
    GridToggled(bool),
    NavigationBarToggled(bool),
    CurrentDateEdited(NaiveDate),
    MinimumDateEdited(NaiveDate),
    MaximumDateEdited(NaiveDate),
    WeekdayColorSelected(usize),
    WeekendColorSelected(usize),
    HeaderTextFormatSelected(usize),
    MayFirstToggled(bool),
    /// A grid cell was clicked
    CalendarDayClicked(NaiveDate),
    /// Navigation requested a month page
    CalendarPageRequested { year: i32, month: u32 },
    /// Calendar notification: selection moved
    SelectionChanged(NaiveDate),
    /// Calendar notification: shown page moved
    CurrentPageChanged { year: i32, month: u32 },
}

impl From<CalendarSignal> for PanelEvent {
    fn from(signal: CalendarSignal) -> Self {
        match signal {
            CalendarSignal::SelectionChanged(date) => PanelEvent::SelectionChanged(date),
            CalendarSignal::CurrentPageChanged { year, month } => {
                PanelEvent::CurrentPageChanged { year, month }
            }
        }
    }
}

fn color_table() -> OptionTable<NamedColor> {
    OptionTable::new([
        ("Red", NamedColor::Red),
        ("Blue", NamedColor::Blue),
        ("Black", NamedColor::Black),
        ("Magenta", NamedColor::Magenta),
    ])
}

pub struct ConfigPanel {
    calendar: CalendarDisplay,
    locales: OptionTable<DisplayLocale>,
    first_day: OptionTable<Weekday>,
    selection_mode: OptionTable<SelectionMode>,
    horizontal_header: OptionTable<HorizontalHeaderFormat>,
    vertical_header: OptionTable<VerticalHeaderFormat>,
    grid_visible: bool,
    navigation_bar_visible: bool,
    minimum_date: DateField,
    current_date: DateField,
    maximum_date: DateField,
    weekday_color: OptionTable<NamedColor>,
    weekend_color: OptionTable<NamedColor>,
    header_text_format: OptionTable<()>,
    may_first_highlighted: bool,
}

impl ConfigPanel {
    /// Build the panel with every control at its default and the calendar in sync.
    pub fn new(today: NaiveDate, preferred_locale: DisplayLocale) -> Self {
        let mut calendar = CalendarDisplay::new(today);
        calendar.set_minimum_date(date_field_minimum());
        calendar.set_maximum_date(date_field_maximum());
        calendar.set_grid_visible(true);

        let locales = OptionTable::new(DisplayLocale::all().map(|l| (l.label(), l)));
        let locale_index = locales.find_value(preferred_locale).unwrap_or(0);
        let locales = locales.with_current(locale_index);
        if let Some(locale) = locales.current_value() {
            calendar.set_locale(locale);
        }

        let first_day = OptionTable::new([
            ("Monday", Weekday::Mon),
            ("Tuesday", Weekday::Tue),
            ("Wednesday", Weekday::Wed),
            ("Thursday", Weekday::Thu),
            ("Friday", Weekday::Fri),
            ("Saturday", Weekday::Sat),
            ("Sunday", Weekday::Sun),
        ]);
        let selection_mode = OptionTable::new([
            ("Single selection", SelectionMode::SingleSelection),
            ("None", SelectionMode::NoSelection),
        ]);
        let horizontal_header = OptionTable::new([
            ("Single-letter day names", HorizontalHeaderFormat::SingleLetterDayNames),
            ("Short day names", HorizontalHeaderFormat::ShortDayNames),
            ("No header", HorizontalHeaderFormat::NoHorizontalHeader),
        ])
        .with_current(1);
        let vertical_header = OptionTable::new([
            ("ISO week numbers", VerticalHeaderFormat::IsoWeekNumbers),
            ("No header", VerticalHeaderFormat::NoVerticalHeader),
        ]);

        let (range_min, range_max) = (calendar.minimum_date(), calendar.maximum_date());
        let minimum_date = DateField::new(range_min, range_min, range_max);
        let current_date = DateField::new(calendar.selected_date(), range_min, range_max);
        let maximum_date = DateField::new(range_max, range_min, range_max);

        let weekday_color = color_table();
        let weekday_index = weekday_color.find_label("Black").unwrap_or(0);
        let weekend_color = color_table();
        let weekend_index = weekend_color.find_label("Red").unwrap_or(0);

        let header_text_format = OptionTable::new([
            ("Bold", ()),
            ("Italic", ()),
            ("Green", ()),
            ("Plain", ()),
        ]);

        let mut panel = Self {
            grid_visible: calendar.is_grid_visible(),
            navigation_bar_visible: calendar.is_navigation_bar_visible(),
            calendar,
            locales,
            first_day,
            selection_mode,
            horizontal_header,
            vertical_header,
            minimum_date,
            current_date,
            maximum_date,
            weekday_color: weekday_color.with_current(weekday_index),
            weekend_color: weekend_color.with_current(weekend_index),
            header_text_format,
            may_first_highlighted: false,
        };

        panel.first_day_changed();
        panel.selection_mode_changed();
        panel.horizontal_header_changed();
        panel.vertical_header_changed();
        panel.weekday_format_changed();
        panel.weekend_format_changed();
        panel.reformat_headers();
        panel.reformat_calendar_page();
        panel.calendar.take_signals();

        log::debug!(
            "Configuration panel ready: locale={}, page={}-{:02}",
            panel.calendar.locale().code(),
            panel.calendar.year_shown(),
            panel.calendar.month_shown()
        );
        panel
    }

    pub fn calendar(&self) -> &CalendarDisplay {
        &self.calendar
    }

    pub fn locales(&self) -> &OptionTable<DisplayLocale> {
        &self.locales
    }

    pub fn first_day(&self) -> &OptionTable<Weekday> {
        &self.first_day
    }

    pub fn selection_mode(&self) -> &OptionTable<SelectionMode> {
        &self.selection_mode
    }

    pub fn horizontal_header(&self) -> &OptionTable<HorizontalHeaderFormat> {
        &self.horizontal_header
    }

    pub fn vertical_header(&self) -> &OptionTable<VerticalHeaderFormat> {
        &self.vertical_header
    }

    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn navigation_bar_visible(&self) -> bool {
        self.navigation_bar_visible
    }

    pub fn minimum_date(&self) -> &DateField {
        &self.minimum_date
    }

    pub fn current_date(&self) -> &DateField {
        &self.current_date
    }

    pub fn maximum_date(&self) -> &DateField {
        &self.maximum_date
    }

    pub fn weekday_color(&self) -> &OptionTable<NamedColor> {
        &self.weekday_color
    }

    pub fn weekend_color(&self) -> &OptionTable<NamedColor> {
        &self.weekend_color
    }

    pub fn header_text_format(&self) -> &OptionTable<()> {
        &self.header_text_format
    }

    pub fn may_first_highlighted(&self) -> bool {
        self.may_first_highlighted
    }

    /// Handle one event and every follow-up it causes.
    pub fn handle(&mut self, event: PanelEvent) {
        let mut queue = VecDeque::from([event]);
        let mut steps = 0;

        while let Some(next) = queue.pop_front() {
            steps += 1;
            if steps > MAX_RULE_STEPS {
                log::warn!("Dropping {} queued panel events after {:?}", queue.len() + 1, event);
                break;
            }
            self.apply(next, &mut queue);
            queue.extend(self.calendar.take_signals().into_iter().map(PanelEvent::from));
        }
    }

    /// Handle a batch of events in order.
    pub fn handle_all(&mut self, events: impl IntoIterator<Item = PanelEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    fn apply(&mut self, event: PanelEvent, queue: &mut VecDeque<PanelEvent>) {
        match event {
            PanelEvent::LocaleSelected(index) => {
                if self.locales.set_current_index(index) {
                    self.locale_changed(queue);
                }
            }
            PanelEvent::FirstDaySelected(index) => {
                if self.first_day.set_current_index(index) {
                    self.first_day_changed();
                }
            }
            PanelEvent::SelectionModeSelected(index) => {
                if self.selection_mode.set_current_index(index) {
                    self.selection_mode_changed();
                }
            }
            PanelEvent::HorizontalHeaderSelected(index) => {
                if self.horizontal_header.set_current_index(index) {
                    self.horizontal_header_changed();
                }
            }
            PanelEvent::VerticalHeaderSelected(index) => {
                if self.vertical_header.set_current_index(index) {
                    self.vertical_header_changed();
                }
            }
            PanelEvent::GridToggled(visible) => {
                if self.grid_visible != visible {
                    self.grid_visible = visible;
                    self.calendar.set_grid_visible(visible);
                }
            }
            PanelEvent::NavigationBarToggled(visible) => {
                if self.navigation_bar_visible != visible {
                    self.navigation_bar_visible = visible;
                    self.calendar.set_navigation_bar_visible(visible);
                }
            }
            PanelEvent::CurrentDateEdited(date) => {
                if self.current_date.set_date(date) {
                    self.calendar.set_selected_date(self.current_date.date());
                    // Selection may have been clamped without moving
                    if self.calendar.selected_date() != self.current_date.date() {
                        queue.push_back(PanelEvent::CurrentDateEdited(self.calendar.selected_date()));
                    }
                }
            }
            PanelEvent::MinimumDateEdited(date) => {
                if self.minimum_date.set_date(date) {
                    self.minimum_date_changed(queue);
                }
            }
            PanelEvent::MaximumDateEdited(date) => {
                if self.maximum_date.set_date(date) {
                    self.maximum_date_changed(queue);
                }
            }
            PanelEvent::WeekdayColorSelected(index) => {
                if self.weekday_color.set_current_index(index) {
                    self.weekday_format_changed();
                    self.reformat_calendar_page();
                }
            }
            PanelEvent::WeekendColorSelected(index) => {
                if self.weekend_color.set_current_index(index) {
                    self.weekend_format_changed();
                    self.reformat_calendar_page();
                }
            }
            PanelEvent::HeaderTextFormatSelected(index) => {
                if self.header_text_format.set_current_index(index) {
                    self.reformat_headers();
                }
            }
            PanelEvent::MayFirstToggled(checked) => {
                if self.may_first_highlighted != checked {
                    self.may_first_highlighted = checked;
                    self.reformat_calendar_page();
                }
            }
            PanelEvent::CalendarDayClicked(date) => {
                self.calendar.click_date(date);
            }
            PanelEvent::CalendarPageRequested { year, month } => {
                self.calendar.set_current_page(year, month);
            }
            PanelEvent::SelectionChanged(_) => self.selected_date_changed(queue),
            PanelEvent::CurrentPageChanged { .. } => self.reformat_calendar_page(),
        }
    }

    fn locale_changed(&mut self, queue: &mut VecDeque<PanelEvent>) {
        let Some(locale) = self.locales.current_value() else {
            return;
        };
        log::debug!("Locale changed to {}", locale.code());
        self.calendar.set_locale(locale);

        if let Some(index) = self.first_day.find_value(locale.first_day_of_week()) {
            queue.push_back(PanelEvent::FirstDaySelected(index));
        }
    }

    fn first_day_changed(&mut self) {
        if let Some(day) = self.first_day.current_value() {
            log::debug!("First day of week set to {:?}", day);
            self.calendar.set_first_day_of_week(day);
        }
    }

    fn selection_mode_changed(&mut self) {
        if let Some(mode) = self.selection_mode.current_value() {
            self.calendar.set_selection_mode(mode);
        }
    }

    fn horizontal_header_changed(&mut self) {
        if let Some(format) = self.horizontal_header.current_value() {
            self.calendar.set_horizontal_header_format(format);
        }
    }

    fn vertical_header_changed(&mut self) {
        if let Some(format) = self.vertical_header.current_value() {
            self.calendar.set_vertical_header_format(format);
        }
    }

    fn selected_date_changed(&mut self, queue: &mut VecDeque<PanelEvent>) {
        queue.push_back(PanelEvent::CurrentDateEdited(self.calendar.selected_date()));
    }

    fn minimum_date_changed(&mut self, queue: &mut VecDeque<PanelEvent>) {
        log::debug!("Minimum date set to {}", self.minimum_date.date());
        self.calendar.set_minimum_date(self.minimum_date.date());
        queue.push_back(PanelEvent::MaximumDateEdited(self.calendar.maximum_date()));
    }

    fn maximum_date_changed(&mut self, queue: &mut VecDeque<PanelEvent>) {
        log::debug!("Maximum date set to {}", self.maximum_date.date());
        self.calendar.set_maximum_date(self.maximum_date.date());
        queue.push_back(PanelEvent::MinimumDateEdited(self.calendar.minimum_date()));
    }

    fn weekday_format_changed(&mut self) {
        let style = self
            .weekday_color
            .current_value()
            .map(TextStyle::with_foreground)
            .unwrap_or_default();
        for day in WEEKDAYS {
            self.calendar.set_weekday_text_style(day, style);
        }
    }

    fn weekend_format_changed(&mut self) {
        let style = self
            .weekend_color
            .current_value()
            .map(TextStyle::with_foreground)
            .unwrap_or_default();
        for day in WEEKEND {
            self.calendar.set_weekday_text_style(day, style);
        }
    }

    fn reformat_headers(&mut self) {
        let style = TextStyle::for_header_label(self.header_text_format.current_label());
        self.calendar.set_header_text_style(style);
    }

    /// Re-apply the May 1st highlight for the year currently shown.
    fn reformat_calendar_page(&mut self) {
        let Some(may_first) = NaiveDate::from_ymd_opt(self.calendar.year_shown(), 5, 1) else {
            return;
        };
        let style = if self.may_first_highlighted {
            TextStyle::with_foreground(NamedColor::Red)
        } else {
            TextStyle::plain()
        };
        self.calendar.set_date_text_style(may_first, style);
    }
}
