use crate::libs::formatter::{format_cell, format_duration};
use crate::libs::messages::Message;
use crate::libs::span::SpanCalculator;
use crate::libs::timesheet::{parse_user_series, select_user_columns, TimesheetError, UserColumn};
use crate::msg_warning;
use chrono::{Duration, NaiveTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTotal {
    pub name: String,
    pub duration: Duration,
    /// Trailing clock-in left without a clock-out.
    pub unpaired: usize,
}

/// Worked-hours totals for every user column of a timesheet, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub totals: Vec<UserTotal>,
}

impl Summary {
    /// Builds the summary from a fetched grid whose first row holds the headers.
    ///
    /// An empty grid yields an empty summary. Any malformed timestamp cell fails
    /// the whole computation.
    pub fn from_grid(grid: &[Vec<String>]) -> Result<Self, TimesheetError> {
        let Some((headers, rows)) = grid.split_first() else {
            return Ok(Self::default());
        };

        let series = parse_user_series(rows, select_user_columns(headers))?;

        Ok(Self::from_series(&series))
    }

    /// Totals already parsed per-user timestamp series, keeping their order.
    ///
    /// Columns sharing a header name collapse into one entry: it keeps the
    /// position of the first column and takes the total of the last one.
    pub fn from_series(series: &[(UserColumn, Vec<NaiveTime>)]) -> Self {
        let mut totals: Vec<UserTotal> = Vec::with_capacity(series.len());

        for (column, timestamps) in series {
            let total = UserTotal {
                name: column.name.clone(),
                duration: timestamps.total_duration(),
                unpaired: timestamps.unpaired(),
            };
            match totals.iter_mut().find(|existing| existing.name == total.name) {
                Some(existing) => {
                    msg_warning!(Message::DuplicateUserColumn(total.name.clone()));
                    *existing = total;
                }
                None => totals.push(total),
            }
        }

        Self { totals }
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn names_row(&self) -> Vec<String> {
        self.totals.iter().map(|total| total.name.clone()).collect()
    }

    pub fn totals_row(&self) -> Vec<String> {
        self.totals.iter().map(|total| format_duration(&total.duration)).collect()
    }

    /// One `[name, "H:M:00.000"]` row per user, ready to be written to the sheet.
    pub fn write_back_rows(&self) -> Vec<Vec<String>> {
        self.totals
            .iter()
            .map(|total| vec![total.name.clone(), format_cell(&total.duration)])
            .collect()
    }

    pub fn unpaired(&self) -> impl Iterator<Item = &UserTotal> {
        self.totals.iter().filter(|total| total.unpaired > 0)
    }
}
