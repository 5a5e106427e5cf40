// Integration tests for the configuration panel
mod fixtures;

use calendar_widget_demo::models::calendar::{HorizontalHeaderFormat, SelectionMode};
use calendar_widget_demo::models::text_style::{NamedColor, TextStyle};
use calendar_widget_demo::ui_egui::PanelEvent;
use chrono::Weekday;
use fixtures::{dates, panels};
use pretty_assertions::assert_eq;

#[test]
fn test_panel_defaults_end_to_end() {
    let panel = panels::default_panel();

    assert_eq!(panel.minimum_date().date(), dates::range_start());
    assert_eq!(panel.maximum_date().date(), dates::range_end());
    assert_eq!(panel.calendar().minimum_date(), dates::range_start());
    assert_eq!(panel.calendar().maximum_date(), dates::range_end());
    assert_eq!(panel.weekday_color().current_label(), "Black");
    assert_eq!(panel.weekend_color().current_label(), "Red");
    assert_eq!(panel.horizontal_header().current_label(), "Short day names");
    assert_eq!(
        panel.calendar().horizontal_header_format(),
        HorizontalHeaderFormat::ShortDayNames
    );
    for field in [panel.minimum_date(), panel.current_date(), panel.maximum_date()] {
        assert_eq!(field.year_range(), 1900..=3000);
    }
}

#[test]
fn test_fixed_enumerations() {
    let panel = panels::default_panel();

    assert_eq!(
        panel.first_day().labels().collect::<Vec<_>>(),
        vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
    assert_eq!(
        panel.selection_mode().labels().collect::<Vec<_>>(),
        vec!["Single selection", "None"]
    );
    assert_eq!(
        panel.horizontal_header().labels().collect::<Vec<_>>(),
        vec!["Single-letter day names", "Short day names", "No header"]
    );
    assert_eq!(
        panel.vertical_header().labels().collect::<Vec<_>>(),
        vec!["ISO week numbers", "No header"]
    );
    assert_eq!(
        panel.weekday_color().labels().collect::<Vec<_>>(),
        vec!["Red", "Blue", "Black", "Magenta"]
    );
    assert_eq!(
        panel.weekend_color().labels().collect::<Vec<_>>(),
        vec!["Red", "Blue", "Black", "Magenta"]
    );
    assert_eq!(
        panel.header_text_format().labels().collect::<Vec<_>>(),
        vec!["Bold", "Italic", "Green", "Plain"]
    );
}

#[test]
fn test_locale_session() {
    let mut panel = panels::default_panel();

    // User picks US English: Sunday first
    let us = panels::locale_index(&panel, "en_US");
    panel.handle(PanelEvent::LocaleSelected(us));
    assert_eq!(panel.calendar().first_day_of_week(), Weekday::Sun);

    // Then overrides the first day by hand
    panel.handle(PanelEvent::FirstDaySelected(2));
    assert_eq!(panel.calendar().first_day_of_week(), Weekday::Wed);
    assert_eq!(panel.calendar().locale().code(), "en_US");

    // Switching to Russian restores the Monday convention
    let ru = panels::locale_index(&panel, "ru_RU");
    panel.handle(PanelEvent::LocaleSelected(ru));
    assert_eq!(panel.first_day().current_label(), "Monday");
    assert_eq!(panel.calendar().first_day_of_week(), Weekday::Mon);
    assert_eq!(panel.calendar().locale().month_name(5), "Май");
}

#[test]
fn test_date_bounds_session() {
    let mut panel = panels::default_panel();

    panel.handle_all([
        PanelEvent::MinimumDateEdited(dates::leap_day_2024()),
        PanelEvent::CalendarDayClicked(dates::leap_day_2024()),
    ]);
    assert_eq!(panel.current_date().date(), dates::leap_day_2024());
    assert_eq!(panel.calendar().month_shown(), 2);

    // Day before the minimum is not selectable
    let before = dates::leap_day_2024().pred_opt().unwrap();
    panel.handle(PanelEvent::CalendarDayClicked(before));
    assert_eq!(panel.calendar().selected_date(), dates::leap_day_2024());

    // Paging before the minimum stays on the minimum's month
    panel.handle(PanelEvent::CalendarPageRequested { year: 2023, month: 1 });
    assert_eq!(
        (panel.calendar().year_shown(), panel.calendar().month_shown()),
        (2024, 2)
    );
}

#[test]
fn test_text_format_session() {
    let mut panel = panels::default_panel();

    panel.handle_all([
        PanelEvent::WeekendColorSelected(1),
        PanelEvent::HeaderTextFormatSelected(1),
        PanelEvent::MayFirstToggled(true),
        PanelEvent::CalendarPageRequested { year: 2027, month: 4 },
    ]);

    let cal = panel.calendar();
    assert_eq!(
        cal.weekday_text_style(Weekday::Sat),
        TextStyle::with_foreground(NamedColor::Blue)
    );
    assert!(cal.header_text_style().is_italic());
    assert_eq!(
        cal.date_text_style(dates::may_first(2027)).foreground,
        Some(NamedColor::Red)
    );
    // May 1 2027 is a Saturday: the date override wins over the weekend color
    assert_eq!(
        cal.style_for_date(dates::may_first(2027)).foreground,
        Some(NamedColor::Red)
    );
}

#[test]
fn test_no_selection_mode_blocks_clicks() {
    let mut panel = panels::default_panel();
    panel.handle(PanelEvent::SelectionModeSelected(1));
    assert_eq!(panel.calendar().selection_mode(), SelectionMode::NoSelection);

    panel.handle(PanelEvent::CalendarDayClicked(dates::may_first(2026)));
    assert_eq!(panel.calendar().selected_date(), dates::today());

    // The current date field still drives the selection
    panel.handle(PanelEvent::CurrentDateEdited(dates::may_first(2026)));
    assert_eq!(panel.calendar().selected_date(), dates::may_first(2026));
}
