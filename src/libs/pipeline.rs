//! The fetch → total → write-back pipeline, independent of any terminal I/O.
//!
//! ```rust,no_run
//! use sheetclock::api::{Credentials, SheetsClient};
//! use sheetclock::libs::pipeline::Timesheet;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = SheetsClient::new(Credentials::authorize().await?, "1AbCdEf...");
//! let timesheet = Timesheet::new(client);
//! let summary = timesheet.summarize(&"A:G".parse()?).await?;
//! timesheet.write_back(&"H1:I4".parse()?, &summary).await?;
//! # Ok(())
//! # }
//! ```

use crate::api::{GridSource, SheetsError, UpdateResponse};
use crate::libs::messages::Message;
use crate::libs::range::CellRange;
use crate::libs::summary::Summary;
use crate::libs::timesheet::{parse_user_series, select_user_columns, TimesheetError};
use crate::msg_debug;
use std::time::Instant;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] SheetsError),
    #[error(transparent)]
    Timesheet(#[from] TimesheetError),
}

fn log_step(step: &str, started: Instant) {
    msg_debug!(Message::StepCompleted(step.to_string(), started.elapsed().as_nanos()));
}

pub struct Timesheet<S> {
    source: S,
}

impl<S: GridSource> Timesheet<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches `range` and totals every user column found in its header row.
    ///
    /// Runs the same steps as [`Summary::from_grid`], one at a time so each can be timed.
    pub async fn summarize(&self, range: &CellRange) -> Result<Summary, PipelineError> {
        let started = Instant::now();
        let grid = self.source.fetch(range).await?;
        log_step("Fetching spreadsheet values", started);

        let Some((headers, rows)) = grid.split_first() else {
            msg_debug!(Message::EmptyGrid(range.to_string()));
            return Ok(Summary::default());
        };

        let started = Instant::now();
        let columns = select_user_columns(headers);
        log_step("Filtering data", started);

        let started = Instant::now();
        let series = parse_user_series(rows, columns)?;
        log_step("Converting timestamp strings", started);

        let started = Instant::now();
        let summary = Summary::from_series(&series);
        log_step("Summing time deltas", started);

        Ok(summary)
    }

    /// Writes one `[name, total]` row per user into `range`.
    pub async fn write_back(&self, range: &CellRange, summary: &Summary) -> Result<UpdateResponse, SheetsError> {
        self.source.write(range, &summary.write_back_rows()).await
    }
}
