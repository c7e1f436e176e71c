//! Configuration management for sheetclock.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file means "all defaults", so the tool runs
//! without any setup as long as a spreadsheet ID can be resolved some other way.
//!
//! ## Spreadsheet ID Resolution
//!
//! The spreadsheet a run works on is resolved once, in this order:
//!
//! 1. The `--sheet` command-line value (URL or bare ID)
//! 2. The `GOOGLE_SHEET` environment variable, which may come from `.env`
//! 3. The `sheet_id` saved in `config.json`
//! 4. An interactive prompt for the spreadsheet URL
//!
//! The result is handed to the pipeline explicitly; nothing reads the
//! environment after that point.
//!
//! ```rust,no_run
//! use sheetclock::libs::config::Config;
//!
//! let config = Config::read()?;
//! let sheet_id = config.sheet_id_or_prompt(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::prompt::prompt_until;
use crate::libs::range::{extract_sheet_id, CellRange, DEFAULT_READ_RANGE};
use crate::{msg_debug, msg_print};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable holding the spreadsheet ID.
pub const SHEET_ENV_VAR: &str = "GOOGLE_SHEET";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Google Sheets spreadsheet ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_id: Option<String>,

    /// Range offered as the default when asking which cells to read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_range: Option<String>,

    /// Range offered as the default when asking where to write totals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_range: Option<String>,
}

impl Config {
    /// Reads `config.json`, returning defaults when it does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. Returns `false` if there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// The default read range, falling back to `A:G` when unset or invalid.
    pub fn read_range(&self) -> CellRange {
        self.read_range
            .as_deref()
            .and_then(|range| range.parse().ok())
            .unwrap_or_default()
    }

    /// The saved write range, if one is set and valid.
    pub fn write_range(&self) -> Option<CellRange> {
        self.write_range.as_deref().and_then(|range| range.parse().ok())
    }

    /// Resolves the spreadsheet ID from the CLI value, environment or saved config.
    pub fn sheet_id(&self, flag: Option<&str>) -> Option<String> {
        if let Some(id) = flag.and_then(extract_sheet_id) {
            msg_debug!(format!("Spreadsheet ID from command line: {}", id));
            return Some(id);
        }
        if let Some(id) = env::var(SHEET_ENV_VAR).ok().as_deref().and_then(extract_sheet_id) {
            msg_print!(Message::SheetIdFromEnv);
            return Some(id);
        }
        if let Some(id) = self.sheet_id.as_deref().and_then(extract_sheet_id) {
            msg_print!(Message::SheetIdFromConfig);
            return Some(id);
        }
        None
    }

    /// Like [`Config::sheet_id`], but asks for a spreadsheet URL when nothing is configured.
    pub fn sheet_id_or_prompt(&self, flag: Option<&str>) -> Result<String> {
        if let Some(id) = self.sheet_id(flag) {
            return Ok(id);
        }
        msg_print!(Message::SheetIdNotFound);
        let url = prompt_url(None)?;
        // prompt_url only accepts values extract_sheet_id understands
        Ok(extract_sheet_id(&url).unwrap_or(url))
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleSheet);
        let sheet = prompt_url(config.sheet_id.as_deref())?;
        let read_range = prompt_until(
            &Message::PromptDefaultReadRange.to_string(),
            Some(config.read_range.as_deref().unwrap_or(DEFAULT_READ_RANGE)),
            CellRange::is_valid,
            &Message::InvalidCellRange.to_string(),
        )?;
        let write_range = prompt_until(
            &Message::PromptDefaultWriteRange.to_string(),
            Some(config.write_range.as_deref().unwrap_or("")),
            |range| range.is_empty() || CellRange::is_valid(range),
            &Message::InvalidCellRange.to_string(),
        )?;

        Ok(Self {
            sheet_id: extract_sheet_id(&sheet),
            read_range: Some(read_range),
            write_range: (!write_range.is_empty()).then_some(write_range),
        })
    }
}

fn prompt_url(default: Option<&str>) -> Result<String> {
    prompt_until(
        &Message::PromptSheetUrl.to_string(),
        default,
        |url| extract_sheet_id(url).is_some(),
        &Message::InvalidSheetUrl.to_string(),
    )
}
