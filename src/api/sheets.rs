//! Google Sheets API v4 client.
//!
//! Only the `spreadsheets.values` endpoints are used:
//!
//! - `GET  /v4/spreadsheets/{id}/values/{range}` to read a grid
//! - `PUT  /v4/spreadsheets/{id}/values/{range}?valueInputOption=USER_ENTERED`
//!   to write one
//!
//! Every request is a single attempt; failures are returned to the caller.

use super::{Credentials, GridSource, SheetsError, UpdateResponse};
use crate::libs::range::CellRange;
use crate::libs::timesheet::RawGrid;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Values are entered as if typed by a user, so `8:0:00.000` becomes a duration.
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

#[derive(Debug, Serialize)]
struct ValueRangeBody<'a> {
    values: &'a [Vec<String>],
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Renders a cell the way the sheet displays it.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[derive(Debug)]
pub struct SheetsClient {
    client: Client,
    credentials: Credentials,
    sheet_id: String,
    api_url: String,
}

impl SheetsClient {
    pub fn new(credentials: Credentials, sheet_id: &str) -> Self {
        Self {
            client: Client::new(),
            credentials,
            sheet_id: sheet_id.to_string(),
            api_url: API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    fn values_url(&self, range: &CellRange) -> String {
        format!("{}/{}/values/{}", self.api_url, self.sheet_id, range)
    }

    /// Turns a non-2xx response into `SheetsError::Api`, preferring Google's own message.
    async fn check(res: Response) -> Result<Response, SheetsError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|error| error.error.message)
            .unwrap_or(body);
        Err(SheetsError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl GridSource for SheetsClient {
    async fn fetch(&self, range: &CellRange) -> Result<RawGrid, SheetsError> {
        let res = self
            .client
            .get(self.values_url(range))
            .bearer_auth(self.credentials.access_token())
            .send()
            .await?;
        let value_range: ValueRange = Self::check(res).await?.json().await?;

        Ok(value_range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn write(&self, range: &CellRange, rows: &[Vec<String>]) -> Result<UpdateResponse, SheetsError> {
        let res = self
            .client
            .put(self.values_url(range))
            .query(&[("valueInputOption", VALUE_INPUT_OPTION)])
            .bearer_auth(self.credentials.access_token())
            .json(&ValueRangeBody { values: rows })
            .send()
            .await?;

        Ok(Self::check(res).await?.json().await?)
    }
}
