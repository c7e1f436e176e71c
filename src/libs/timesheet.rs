//! Timesheet grid interpretation.
//!
//! A timesheet grid has a header row followed by data rows. Each header that is
//! not one of the fixed label columns names a user, and the cells below it hold
//! that user's alternating clock-in/clock-out times as `HH:MM` text.
//!
//! ```rust
//! use sheetclock::libs::timesheet::{select_user_columns, parse_timestamps};
//!
//! let grid: Vec<Vec<String>> = vec![
//!     vec!["Tasks".into(), "Clock in/out".into(), "Alice".into()],
//!     vec!["Open".into(), "In".into(), "09:00".into()],
//!     vec!["Close".into(), "Out".into(), "17:00".into()],
//! ];
//! let users = select_user_columns(&grid[0]);
//! let series = parse_timestamps(&grid[1..], &users[0]).unwrap();
//! assert_eq!(series.len(), 2);
//! ```

use chrono::NaiveTime;
use thiserror::Error;

/// Header labels that never denote a user column.
pub const LABEL_COLUMNS: [&str; 2] = ["Tasks", "Clock in/out"];

/// Format accepted for timestamp cells.
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

/// Raw cell values as returned by the spreadsheet: headers first, then data rows.
pub type RawGrid = Vec<Vec<String>>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimesheetError {
    /// `row` is the 1-based row number within the fetched range.
    #[error("Invalid timestamp '{value}' for {user} in row {row}: expected HH:MM")]
    InvalidTimestamp { user: String, row: usize, value: String },
}

/// A column of the grid that holds one user's timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserColumn {
    pub name: String,
    pub index: usize,
}

/// Picks the user columns from the header row, in header order.
pub fn select_user_columns(headers: &[String]) -> Vec<UserColumn> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, name)| !LABEL_COLUMNS.contains(&name.as_str()))
        .map(|(index, name)| UserColumn {
            name: name.clone(),
            index,
        })
        .collect()
}

/// Parses a single `HH:MM` cell into a time of day.
///
/// Cells with any whitespace are rejected, including padding around the digits.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    if value.chars().any(char::is_whitespace) {
        return None;
    }
    NaiveTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}

/// Collects the timestamps of one user column from the data rows.
///
/// Rows that are too short to reach the column and empty cells are skipped.
/// Any other cell that is not a valid `HH:MM` time aborts parsing.
pub fn parse_timestamps(rows: &[Vec<String>], column: &UserColumn) -> Result<Vec<NaiveTime>, TimesheetError> {
    let mut series = Vec::new();

    for (offset, row) in rows.iter().enumerate() {
        let Some(cell) = row.get(column.index) else {
            continue;
        };
        if cell.is_empty() {
            continue;
        }
        match parse_time(cell) {
            Some(time) => series.push(time),
            None => {
                return Err(TimesheetError::InvalidTimestamp {
                    user: column.name.clone(),
                    // +1 for the header row, +1 for 1-based numbering
                    row: offset + 2,
                    value: cell.clone(),
                })
            }
        }
    }

    Ok(series)
}

/// Parses every user column, keeping column order. Fails on the first bad cell.
pub fn parse_user_series(
    rows: &[Vec<String>],
    columns: Vec<UserColumn>,
) -> Result<Vec<(UserColumn, Vec<NaiveTime>)>, TimesheetError> {
    columns
        .into_iter()
        .map(|column| {
            let timestamps = parse_timestamps(rows, &column)?;
            Ok((column, timestamps))
        })
        .collect()
}
