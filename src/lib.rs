//! # Sheetclock - Spreadsheet Clock-in/Clock-out Summaries
//!
//! A command-line utility that reads employee clock-in/clock-out times from a
//! Google Sheets timesheet, totals the worked hours per person and optionally
//! writes the totals back to the spreadsheet.
//!
//! ## Features
//!
//! - **Timesheet Parsing**: One column per person, `HH:MM` cells, label columns skipped
//! - **Overnight Shifts**: Clock-outs past midnight are rolled over to the next day
//! - **Summaries**: Console table of totals per person
//! - **Write-back**: Totals written to a chosen range as elapsed-time cells
//! - **Google Sheets Integration**: OAuth token cache with automatic refresh
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sheetclock::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
