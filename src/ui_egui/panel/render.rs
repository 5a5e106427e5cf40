//! Group boxes of the configuration panel.

use chrono::NaiveDate;
use egui_extras::DatePickerButton;

use super::options::{DateField, OptionTable};
use super::{ConfigPanel, PanelEvent};
use crate::ui_egui::calendar_view::CalendarView;
use crate::ui_egui::theme::CalendarTheme;

/// Display format of the date fields ("d MMM yyyy")
const DATE_DISPLAY_FORMAT: &str = "%-d %b %Y";
const COMBO_WIDTH: f32 = 200.0;

/// Render the four group boxes and collect the events raised this frame.
pub fn render_config_panel(
    ui: &mut egui::Ui,
    panel: &ConfigPanel,
    theme: &CalendarTheme,
) -> Vec<PanelEvent> {
    let mut events = Vec::new();

    egui::Grid::new("config_panel_layout")
        .num_columns(2)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            group_box(ui, "Preview", |ui| {
                CalendarView::show(ui, panel.calendar(), theme, &mut events);
            });
            group_box(ui, "General Options", |ui| {
                render_general_options(ui, panel, &mut events);
            });
            ui.end_row();

            group_box(ui, "Dates", |ui| {
                render_dates(ui, panel, &mut events);
            });
            group_box(ui, "Text Formats", |ui| {
                render_text_formats(ui, panel, &mut events);
            });
            ui.end_row();
        });

    events
}

fn group_box(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(title).strong());
            ui.add_space(4.0);
            add_contents(ui);
        });
    });
}

fn render_general_options(ui: &mut egui::Ui, panel: &ConfigPanel, events: &mut Vec<PanelEvent>) {
    egui::Grid::new("general_options_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Locale:");
            if let Some(index) = option_combo(ui, "locale_combo", panel.locales()) {
                events.push(PanelEvent::LocaleSelected(index));
            }
            ui.end_row();

            ui.label("Week starts on:");
            if let Some(index) = option_combo(ui, "first_day_combo", panel.first_day()) {
                events.push(PanelEvent::FirstDaySelected(index));
            }
            ui.end_row();

            ui.label("Selection mode:");
            if let Some(index) = option_combo(ui, "selection_mode_combo", panel.selection_mode()) {
                events.push(PanelEvent::SelectionModeSelected(index));
            }
            ui.end_row();

            let mut grid_visible = panel.grid_visible();
            if ui.checkbox(&mut grid_visible, "Grid").changed() {
                events.push(PanelEvent::GridToggled(grid_visible));
            }
            let mut navigation_visible = panel.navigation_bar_visible();
            if ui.checkbox(&mut navigation_visible, "Navigation bar").changed() {
                events.push(PanelEvent::NavigationBarToggled(navigation_visible));
            }
            ui.end_row();

            ui.label("Horizontal header:");
            if let Some(index) =
                option_combo(ui, "horizontal_header_combo", panel.horizontal_header())
            {
                events.push(PanelEvent::HorizontalHeaderSelected(index));
            }
            ui.end_row();

            ui.label("Vertical header:");
            if let Some(index) = option_combo(ui, "vertical_header_combo", panel.vertical_header())
            {
                events.push(PanelEvent::VerticalHeaderSelected(index));
            }
            ui.end_row();
        });
}

fn render_dates(ui: &mut egui::Ui, panel: &ConfigPanel, events: &mut Vec<PanelEvent>) {
    egui::Grid::new("dates_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Minimum date:");
            if let Some(date) = date_field(ui, "minimum_date_edit", panel.minimum_date()) {
                events.push(PanelEvent::MinimumDateEdited(date));
            }
            ui.end_row();

            ui.label("Current date:");
            if let Some(date) = date_field(ui, "current_date_edit", panel.current_date()) {
                events.push(PanelEvent::CurrentDateEdited(date));
            }
            ui.end_row();

            ui.label("Maximum date:");
            if let Some(date) = date_field(ui, "maximum_date_edit", panel.maximum_date()) {
                events.push(PanelEvent::MaximumDateEdited(date));
            }
            ui.end_row();
        });
}

fn render_text_formats(ui: &mut egui::Ui, panel: &ConfigPanel, events: &mut Vec<PanelEvent>) {
    egui::Grid::new("text_formats_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Weekday color:");
            if let Some(index) = option_combo(ui, "weekday_color_combo", panel.weekday_color()) {
                events.push(PanelEvent::WeekdayColorSelected(index));
            }
            ui.end_row();

            ui.label("Weekend color:");
            if let Some(index) = option_combo(ui, "weekend_color_combo", panel.weekend_color()) {
                events.push(PanelEvent::WeekendColorSelected(index));
            }
            ui.end_row();

            ui.label("Header text:");
            if let Some(index) =
                option_combo(ui, "header_text_format_combo", panel.header_text_format())
            {
                events.push(PanelEvent::HeaderTextFormatSelected(index));
            }
            ui.end_row();

            ui.label("");
            let mut may_first = panel.may_first_highlighted();
            if ui.checkbox(&mut may_first, "First May in red").changed() {
                events.push(PanelEvent::MayFirstToggled(may_first));
            }
            ui.end_row();
        });
}

/// Combo box over an option table; returns the newly picked index.
fn option_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    table: &OptionTable<T>,
) -> Option<usize> {
    let current = table.current_index();
    let mut selected = current;
    egui::ComboBox::from_id_source(id)
        .selected_text(table.current_label())
        .width(COMBO_WIDTH)
        .show_ui(ui, |ui| {
            for (index, label) in table.labels().enumerate() {
                ui.selectable_value(&mut selected, index, label);
            }
        });
    (selected != current).then_some(selected)
}

/// Date picker over a date field; returns the newly picked date.
fn date_field(ui: &mut egui::Ui, id: &str, field: &DateField) -> Option<NaiveDate> {
    let mut date = field.date();
    let response = ui.add(
        DatePickerButton::new(&mut date)
            .id_source(id)
            .format(DATE_DISPLAY_FORMAT)
            .calendar_week(true)
            .start_end_years(field.year_range()),
    );
    (response.changed() && date != field.date()).then_some(date)
}
