//! Mapping from calendar text styles to egui colors and rich text.

use crate::models::text_style::{NamedColor, TextStyle};
use crate::ui_egui::theme::CalendarTheme;
use egui::{Color32, RichText};

/// Opacity applied to days outside the shown month or the date bounds
const DIMMED_FACTOR: f32 = 0.4;

pub(crate) fn named_color(color: NamedColor) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Render text with a calendar text style on top of the theme's text color.
pub(crate) fn styled_text(
    text: impl Into<String>,
    style: TextStyle,
    theme: &CalendarTheme,
    dimmed: bool,
) -> RichText {
    let color = style
        .foreground
        .map(named_color)
        .unwrap_or(theme.text_primary);
    let color = if dimmed {
        color.gamma_multiply(DIMMED_FACTOR)
    } else {
        color
    };

    let mut rich = RichText::new(text).color(color);
    if style.is_bold() {
        rich = rich.strong();
    }
    if style.is_italic() {
        rich = rich.italics();
    }
    rich
}
