//! A1-notation cell ranges and spreadsheet identifiers entered by the user.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Range read when the user does not supply one.
pub const DEFAULT_READ_RANGE: &str = "A:G";

static CELL_RANGE: OnceLock<Regex> = OnceLock::new();
static SHEET_URL: OnceLock<Regex> = OnceLock::new();
static SHEET_ID: OnceLock<Regex> = OnceLock::new();

fn cell_range_pattern() -> &'static Regex {
    CELL_RANGE.get_or_init(|| {
        // A1:B2 | A:B | 1:2
        Regex::new(r"^(?:[A-Z]+\d+:[A-Z]+\d+|[A-Z]+:[A-Z]+|\d+:\d+)$").expect("cell range pattern")
    })
}

fn sheet_url_pattern() -> &'static Regex {
    SHEET_URL.get_or_init(|| Regex::new(r"docs\.google\.com/spreadsheets/d/([\w-]+)").expect("sheet url pattern"))
}

fn sheet_id_pattern() -> &'static Regex {
    SHEET_ID.get_or_init(|| Regex::new(r"^[\w-]{20,}$").expect("sheet id pattern"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid cell range '{0}'")]
pub struct InvalidCellRange(pub String);

/// A validated cell range in one of the forms `A1:B2`, `A:B` or `1:2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRange(String);

impl CellRange {
    pub fn is_valid(input: &str) -> bool {
        cell_range_pattern().is_match(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CellRange {
    fn default() -> Self {
        Self(DEFAULT_READ_RANGE.to_string())
    }
}

impl FromStr for CellRange {
    type Err = InvalidCellRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidCellRange(s.to_string()))
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extracts a spreadsheet ID from a pasted value.
///
/// Accepts either a `https://docs.google.com/spreadsheets/d/<ID>/...` URL or a
/// bare ID.
pub fn extract_sheet_id(input: &str) -> Option<String> {
    let input = input.trim();
    if let Some(captures) = sheet_url_pattern().captures(input) {
        return captures.get(1).map(|id| id.as_str().to_string());
    }
    if sheet_id_pattern().is_match(input) {
        return Some(input.to_string());
    }
    None
}
