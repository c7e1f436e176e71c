//! Core library modules for the sheetclock application.
//!
//! ## Features
//!
//! - **Timesheet Interpretation**: User column selection and `HH:MM` parsing
//! - **Span Calculation**: Clock-in/clock-out pairing with midnight rollover
//! - **Summaries**: Per-user totals, display rows and write-back rows
//! - **User Interface**: Prompts, console tables, message formatting
//! - **Infrastructure**: Configuration and data storage paths
//!
//! ## Usage
//!
//! ```rust
//! use sheetclock::libs::summary::Summary;
//!
//! let grid: Vec<Vec<String>> = vec![
//!     vec!["Tasks".into(), "Clock in/out".into(), "Bob".into()],
//!     vec!["".into(), "In".into(), "22:30".into()],
//!     vec!["".into(), "Out".into(), "02:15".into()],
//! ];
//! let summary = Summary::from_grid(&grid).unwrap();
//! assert_eq!(summary.totals_row(), vec!["3:45"]);
//! ```

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod pipeline;
pub mod prompt;
pub mod range;
pub mod span;
pub mod summary;
pub mod timesheet;
pub mod view;
