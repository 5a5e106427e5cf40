//! Control state for the configuration panel.
//!
//! Option tables are built once with a fixed list of (label, value) pairs;
//! afterwards only the current index moves.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use crate::utils::date::clamp_date;

/// Ordered (label, value) pairs backing a combo box.
#[derive(Debug, Clone)]
pub struct OptionTable<T> {
    items: Vec<(String, T)>,
    current: usize,
}

impl<T: Copy + PartialEq> OptionTable<T> {
    pub fn new<L: Into<String>>(items: impl IntoIterator<Item = (L, T)>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
            current: 0,
        }
    }

    /// Same table with the current index preset (ignored when out of range).
    pub fn with_current(mut self, index: usize) -> Self {
        self.set_current_index(index);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Move the current index. Returns whether it changed.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    pub fn current_value(&self) -> Option<T> {
        self.items.get(self.current).map(|(_, value)| *value)
    }

    pub fn current_label(&self) -> &str {
        self.items
            .get(self.current)
            .map(|(label, _)| label.as_str())
            .unwrap_or_default()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(label, _)| label.as_str())
    }

    pub fn find_value(&self, value: T) -> Option<usize> {
        self.items.iter().position(|(_, v)| *v == value)
    }

    pub fn find_label(&self, label: &str) -> Option<usize> {
        self.items.iter().position(|(l, _)| l == label)
    }
}

/// A date editor constrained to a fixed valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateField {
    date: NaiveDate,
    minimum: NaiveDate,
    maximum: NaiveDate,
}

impl DateField {
    pub fn new(date: NaiveDate, minimum: NaiveDate, maximum: NaiveDate) -> Self {
        let (minimum, maximum) = if minimum <= maximum {
            (minimum, maximum)
        } else {
            (maximum, minimum)
        };
        Self {
            date: clamp_date(date, minimum, maximum),
            minimum,
            maximum,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn minimum(&self) -> NaiveDate {
        self.minimum
    }

    pub fn maximum(&self) -> NaiveDate {
        self.maximum
    }

    /// Years a date picker for this field must offer.
    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.minimum.year()..=self.maximum.year()
    }

    /// Set the date, clamped into the valid range. Returns whether it changed.
    pub fn set_date(&mut self, date: NaiveDate) -> bool {
        let date = clamp_date(date, self.minimum, self.maximum);
        if date == self.date {
            return false;
        }
        self.date = date;
        true
    }
}
