//! Duration formatting for the totals table and spreadsheet write-back.
//!
//! ## Format Specifications
//!
//! ### Display Format
//! Durations are rendered as `"{hours}:{minutes}"`:
//! - Hours are the whole number of hours in the duration, with no upper bound
//! - Minutes are the whole minutes left over after removing full hours
//! - Neither part is zero-padded
//! - Seconds are truncated, never rounded up
//!
//! ### Cell Format
//! When totals are written back to the spreadsheet the display text is
//! suffixed with `":00.000"`, which the sheet parses as an elapsed-time value.
//!
//! ### Examples
//! - 8 hours → `"8:0"`
//! - 3 hours 45 minutes → `"3:45"`
//! - 1 hour 5 minutes 30 seconds → `"1:5"` / `"1:5:00.000"`
//! - zero → `"0:0"`
//!
//! ```rust
//! use sheetclock::libs::formatter::{format_duration, format_cell};
//! use chrono::Duration;
//!
//! let duration = Duration::hours(1) + Duration::minutes(5) + Duration::seconds(30);
//! assert_eq!(format_duration(&duration), "1:5");
//! assert_eq!(format_cell(&duration), "1:5:00.000");
//! ```

use chrono::Duration;

/// Suffix appended to a formatted duration before it is written to a cell.
pub const CELL_SUFFIX: &str = ":00.000";

/// Formats a duration as `"{hours}:{minutes}"` without zero-padding.
///
/// Seconds are truncated. Negative durations are clamped to zero.
///
/// # Examples
///
/// ```rust
/// use sheetclock::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::zero()), "0:0");
/// assert_eq!(format_duration(&Duration::minutes(225)), "3:45");
/// assert_eq!(format_duration(&Duration::hours(27)), "27:0");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    let hours = seconds / 3600;
    let minutes = (seconds - hours * 3600) / 60;

    format!("{}:{}", hours, minutes)
}

/// Formats a duration for spreadsheet write-back, e.g. `"8:0:00.000"`.
pub fn format_cell(duration: &Duration) -> String {
    format!("{}{}", format_duration(duration), CELL_SUFFIX)
}
