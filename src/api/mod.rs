//! Spreadsheet access for sheetclock.
//!
//! The timesheet logic only ever needs two things from a spreadsheet: read the
//! cell values of a range and write cell values to a range. [`GridSource`]
//! captures exactly that, so the pipeline can run against Google Sheets
//! ([`sheets::SheetsClient`]) or against an in-memory grid in tests.
//!
//! ## Modules
//!
//! - **google**: OAuth token cache, refresh and the one-off consent flow
//! - **sheets**: Google Sheets API v4 `values.get` / `values.update`

use crate::libs::range::CellRange;
use crate::libs::timesheet::RawGrid;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

pub mod google;
pub mod sheets;

pub use google::{Credentials, GoogleToken};
pub use sheets::SheetsClient;

#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Token not found at {0}")]
    TokenNotFound(PathBuf),
    #[error("Credentials not found at {0}")]
    CredentialsNotFound(PathBuf),
    #[error("Invalid credentials format: {0}")]
    InvalidCredentials(String),
    #[error("Token expired and cannot be refreshed")]
    AuthExpired,
    #[error("Token refresh failed: {0}")]
    RefreshFailed(String),
    #[error("OAuth flow cancelled")]
    FlowCancelled,
    #[error("Data storage: {0}")]
    Storage(String),
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of a `values.update` call.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateResponse {
    pub spreadsheet_id: String,
    pub updated_range: String,
    pub updated_rows: u64,
    pub updated_columns: u64,
    pub updated_cells: u64,
}

/// Two-operation view of a spreadsheet used by the timesheet pipeline.
#[allow(async_fn_in_trait)]
pub trait GridSource {
    /// Reads all cell values of `range`, row by row. Trailing empty cells may be
    /// missing from a row.
    async fn fetch(&self, range: &CellRange) -> Result<RawGrid, SheetsError>;

    /// Writes `rows` into `range`, starting at its top-left cell.
    async fn write(&self, range: &CellRange, rows: &[Vec<String>]) -> Result<UpdateResponse, SheetsError>;
}
