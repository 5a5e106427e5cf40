//! Display mode enumerations for the calendar surface.

/// How dates can be selected by clicking the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Dates cannot be selected by the user
    NoSelection,
    /// A single date can be selected
    #[default]
    SingleSelection,
}

/// Format of the day-name header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalHeaderFormat {
    SingleLetterDayNames,
    #[default]
    ShortDayNames,
    NoHorizontalHeader,
}

/// Format of the week header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalHeaderFormat {
    #[default]
    IsoWeekNumbers,
    NoVerticalHeader,
}

/// Notifications raised by the calendar when its state moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarSignal {
    /// The selected date changed
    SelectionChanged(chrono::NaiveDate),
    /// The displayed month page changed
    CurrentPageChanged { year: i32, month: u32 },
}
