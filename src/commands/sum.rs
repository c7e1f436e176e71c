//! Worked-hours summary command.
//!
//! Reads the timesheet range, prints the per-person totals and, if asked,
//! writes `[name, total]` rows back into the spreadsheet.

use crate::{
    api::{Credentials, SheetsClient, SheetsError},
    libs::{
        config::Config,
        messages::Message,
        pipeline::{PipelineError, Timesheet},
        prompt::{confirm, prompt_until},
        range::CellRange,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_error_anyhow, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, help = "Spreadsheet URL or ID")]
    pub sheet: Option<String>,
    #[arg(short, long, help = "Cell range to read, e.g. A:G")]
    pub range: Option<CellRange>,
    #[arg(short, long, help = "Cell range to write totals to", conflicts_with = "no_write")]
    pub write: Option<CellRange>,
    #[arg(long, help = "Do not offer to write totals back")]
    pub no_write: bool,
}

pub async fn cmd(sum_args: SumArgs) -> Result<()> {
    let config = Config::read()?;
    let sheet_id = config.sheet_id_or_prompt(sum_args.sheet.as_deref())?;

    msg_print!(Message::Authorizing);
    let credentials = match Credentials::authorize().await {
        Ok(credentials) => credentials,
        Err(SheetsError::TokenNotFound(_)) => msg_bail_anyhow!(Message::NotLoggedIn),
        Err(e) => return Err(e.into()),
    };
    msg_success!(Message::Authorized);

    let read_range = match sum_args.range.clone() {
        Some(range) => range,
        None => prompt_read_range(&config)?,
    };

    let timesheet = Timesheet::new(SheetsClient::new(credentials, &sheet_id));

    msg_print!(Message::FetchingRange(read_range.to_string()));
    let summary = match timesheet.summarize(&read_range).await {
        Ok(summary) => summary,
        Err(PipelineError::Fetch(e)) => return Err(msg_error_anyhow!(Message::FetchFailed(e.to_string()))),
        Err(e) => return Err(e.into()),
    };

    if summary.is_empty() {
        msg_warning!(Message::NoUsersFound);
        return Ok(());
    }

    for total in summary.unpaired() {
        msg_warning!(Message::UnpairedTimestamps(total.name.clone(), total.unpaired));
    }

    msg_print!(Message::TotalsHeader(read_range.to_string()), true);
    View::totals(&summary)?;

    if let Some(write_range) = write_target(&sum_args, &config, summary.len())? {
        msg_print!(Message::WritingRange(write_range.to_string()));
        // A failed write is reported, not fatal
        match timesheet.write_back(&write_range, &summary).await {
            Ok(response) => msg_success!(Message::WriteSucceeded(response.updated_cells, response.updated_range)),
            Err(e) => msg_error!(Message::WriteFailed(e.to_string())),
        }
    }

    msg_print!(Message::Exiting, true);
    Ok(())
}

fn prompt_read_range(config: &Config) -> Result<CellRange> {
    let default = config.read_range();
    let range = prompt_until(
        &Message::PromptReadRange(default.to_string()).to_string(),
        Some(default.as_str()),
        CellRange::is_valid,
        &Message::InvalidCellRange.to_string(),
    )?;
    Ok(range.parse()?)
}

/// Decides where totals go: `--write`, nothing with `--no-write`, otherwise ask.
fn write_target(sum_args: &SumArgs, config: &Config, users: usize) -> Result<Option<CellRange>> {
    if sum_args.no_write {
        return Ok(None);
    }
    if let Some(range) = &sum_args.write {
        return Ok(Some(range.clone()));
    }
    if !confirm(Message::PromptWriteCells)? {
        return Ok(None);
    }

    let default = config.write_range();
    let range = prompt_until(
        &Message::PromptWriteRange(users).to_string(),
        default.as_ref().map(CellRange::as_str),
        CellRange::is_valid,
        &Message::InvalidCellRange.to_string(),
    )?;
    Ok(Some(range.parse()?))
}
