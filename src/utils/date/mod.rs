// Date utility functions
// Month arithmetic and calendar grid layout helpers

use chrono::{Datelike, NaiveDate, Weekday};

/// Number of rows in a calendar page grid.
pub const GRID_ROWS: usize = 6;

/// Shift a (year, month) page by the given number of months.
pub fn shift_page(year: i32, month: u32, delta_months: i32) -> (i32, u32) {
    let total_months = (year * 12) + (month as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    (new_year, new_month)
}

/// The (year, month) page containing a date.
pub fn page_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Clamp a date into `[min, max]`.
pub fn clamp_date(date: NaiveDate, min: NaiveDate, max: NaiveDate) -> NaiveDate {
    if date < min {
        min
    } else if date > max {
        max
    } else {
        date
    }
}

/// Columns between `first_day` and `day`, in 0..7.
pub fn column_of(day: Weekday, first_day: Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - first_day.num_days_from_monday()) % 7
}

/// Weekday shown in a header column.
pub fn weekday_for_column(first_day: Weekday, column: usize) -> Weekday {
    let mut day = first_day;
    for _ in 0..column % 7 {
        day = day.succ();
    }
    day
}

/// First date drawn in the six-row grid for a month page.
///
/// When the month starts on the first column, a full week of the previous
/// month is shown above it.
pub fn grid_start(year: i32, month: u32, first_day: Weekday) -> Option<NaiveDate> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let mut offset = column_of(first_of_month.weekday(), first_day);
    if offset == 0 {
        offset = 7;
    }
    first_of_month.checked_sub_days(chrono::Days::new(offset as u64))
}
