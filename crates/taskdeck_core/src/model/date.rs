//! Calendar date input parsing and inclusive date windows.
//!
//! # Responsibility
//! - Turn user-typed `YYYY-MM-DD` strings into validated `NaiveDate` values.
//! - Model the inclusive `[start, end]` window used by the range filter.
//!
//! # Invariants
//! - Malformed input is rejected here; views only ever see valid dates.
//! - A reversed window (`start > end`) is legal and contains no date.

use chrono::{Days, NaiveDate};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Accepted input format for every date field.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Date input rejection reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInputError {
    Empty,
    Malformed(String),
}

impl Display for DateInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "date input is empty; expected YYYY-MM-DD"),
            Self::Malformed(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for DateInputError {}

/// Parses one `YYYY-MM-DD` date, ignoring surrounding whitespace.
///
/// Only the zero-padded four-digit-year shape is accepted; chrono alone
/// would also take `2024-1-5` or signed years.
pub fn parse_date_input(value: &str) -> Result<NaiveDate, DateInputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DateInputError::Empty);
    }
    if !has_iso_date_shape(trimmed) {
        return Err(DateInputError::Malformed(trimmed.to_string()));
    }
    NaiveDate::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .map_err(|_| DateInputError::Malformed(trimmed.to_string()))
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Formats a date the same way it is persisted and typed.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Inclusive calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses both bounds; fails on the first malformed one.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateInputError> {
        Ok(Self {
            start: parse_date_input(start)?,
            end: parse_date_input(end)?,
        })
    }

    /// Window covering the `days` days before `today` through `today`.
    pub fn trailing_days(today: NaiveDate, days: u64) -> Self {
        let start = today
            .checked_sub_days(Days::new(days))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}
