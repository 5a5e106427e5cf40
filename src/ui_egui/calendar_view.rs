//! Calendar surface: navigation bar, day headers, week numbers and the day grid.

use chrono::{Datelike, Days, NaiveDate};
use egui::{Stroke, Vec2};

use super::palette::styled_text;
use super::panel::PanelEvent;
use crate::models::calendar::{
    CalendarDisplay, HorizontalHeaderFormat, SelectionMode, VerticalHeaderFormat,
};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{grid_start, shift_page, weekday_for_column, GRID_ROWS};

/// Size of a day cell
const CELL_SIZE: Vec2 = Vec2::new(34.0, 24.0);
/// Width of the week number column
const WEEK_NUMBER_WIDTH: f32 = 26.0;

/// Draws the calendar surface. Interactions are reported as events.
pub struct CalendarView;

impl CalendarView {
    pub fn show(
        ui: &mut egui::Ui,
        calendar: &CalendarDisplay,
        theme: &CalendarTheme,
        events: &mut Vec<PanelEvent>,
    ) {
        egui::Frame::none()
            .fill(theme.calendar_background)
            .rounding(egui::Rounding::same(4))
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                if calendar.is_navigation_bar_visible() {
                    Self::render_navigation_bar(ui, calendar, events);
                    ui.add_space(4.0);
                }
                Self::render_grid(ui, calendar, theme, events);
            });
    }

    /// Year/month arrows around the localized "Month Year" title.
    fn render_navigation_bar(
        ui: &mut egui::Ui,
        calendar: &CalendarDisplay,
        events: &mut Vec<PanelEvent>,
    ) {
        let (year, month) = (calendar.year_shown(), calendar.month_shown());
        let can_go_back = calendar.can_show_previous_month();
        let can_go_forward = calendar.can_show_next_month();

        let mut request = |delta: i32| {
            let (year, month) = shift_page(year, month, delta);
            events.push(PanelEvent::CalendarPageRequested { year, month });
        };

        ui.horizontal(|ui| {
            if ui
                .add_enabled(can_go_back, egui::Button::new("◀◀").small())
                .on_hover_text("Previous year")
                .clicked()
            {
                request(-12);
            }
            if ui
                .add_enabled(can_go_back, egui::Button::new("◀").small())
                .on_hover_text("Previous month")
                .clicked()
            {
                request(-1);
            }

            let title = format!("{} {}", calendar.locale().month_name(month), year);
            ui.label(egui::RichText::new(title).strong());

            if ui
                .add_enabled(can_go_forward, egui::Button::new("▶").small())
                .on_hover_text("Next month")
                .clicked()
            {
                request(1);
            }
            if ui
                .add_enabled(can_go_forward, egui::Button::new("▶▶").small())
                .on_hover_text("Next year")
                .clicked()
            {
                request(12);
            }
        });
    }

    /// Header row, optional week column and six rows of days.
    fn render_grid(
        ui: &mut egui::Ui,
        calendar: &CalendarDisplay,
        theme: &CalendarTheme,
        events: &mut Vec<PanelEvent>,
    ) {
        let first_day = calendar.first_day_of_week();
        let locale = calendar.locale();
        let show_week_numbers =
            calendar.vertical_header_format() == VerticalHeaderFormat::IsoWeekNumbers;
        let columns = if show_week_numbers { 8 } else { 7 };

        let Some(start) = grid_start(calendar.year_shown(), calendar.month_shown(), first_day)
        else {
            return;
        };

        egui::Grid::new("calendar_surface_grid")
            .num_columns(columns)
            .spacing([2.0, 2.0])
            .show(ui, |ui| {
                let header_format = calendar.horizontal_header_format();
                if header_format != HorizontalHeaderFormat::NoHorizontalHeader {
                    if show_week_numbers {
                        ui.allocate_exact_size(
                            Vec2::new(WEEK_NUMBER_WIDTH, CELL_SIZE.y),
                            egui::Sense::hover(),
                        );
                    }
                    for column in 0..7 {
                        let day = weekday_for_column(first_day, column);
                        let name = match header_format {
                            HorizontalHeaderFormat::SingleLetterDayNames => {
                                locale.narrow_day_name(day)
                            }
                            _ => locale.short_day_name(day),
                        };
                        ui.add_sized(
                            CELL_SIZE,
                            egui::Label::new(styled_text(
                                name,
                                calendar.header_style_for(day),
                                theme,
                                false,
                            )),
                        );
                    }
                    ui.end_row();
                }

                for row in 0..GRID_ROWS {
                    let Some(row_start) = start.checked_add_days(Days::new(row as u64 * 7)) else {
                        break;
                    };

                    if show_week_numbers {
                        // Middle of the row decides the ISO week
                        let week = row_start
                            .checked_add_days(Days::new(3))
                            .unwrap_or(row_start)
                            .iso_week()
                            .week();
                        ui.add_sized(
                            Vec2::new(WEEK_NUMBER_WIDTH, CELL_SIZE.y),
                            egui::Label::new(
                                styled_text(
                                    week.to_string(),
                                    calendar.header_text_style(),
                                    theme,
                                    false,
                                )
                                .small(),
                            ),
                        );
                    }

                    for column in 0..7 {
                        if let Some(date) = row_start.checked_add_days(Days::new(column)) {
                            Self::render_day_cell(ui, calendar, date, theme, events);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        calendar: &CalendarDisplay,
        date: NaiveDate,
        theme: &CalendarTheme,
        events: &mut Vec<PanelEvent>,
    ) {
        let in_shown_month =
            date.year() == calendar.year_shown() && date.month() == calendar.month_shown();
        let enabled = calendar.is_date_enabled(date);
        let selected = calendar.selection_mode() == SelectionMode::SingleSelection
            && date == calendar.selected_date();

        let text = styled_text(
            date.day().to_string(),
            calendar.style_for_date(date),
            theme,
            !in_shown_month || !enabled,
        );

        let response = ui
            .add_enabled_ui(enabled, |ui| {
                ui.add_sized(CELL_SIZE, egui::SelectableLabel::new(selected, text))
            })
            .inner;

        if calendar.is_grid_visible() {
            ui.painter()
                .rect_stroke(response.rect.expand(1.0), 0.0, Stroke::new(1.0, theme.grid_line), egui::StrokeKind::Middle);
        }

        if response.clicked() {
            events.push(PanelEvent::CalendarDayClicked(date));
        }
    }
}
