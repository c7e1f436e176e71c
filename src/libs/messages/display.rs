//! Display implementation for sheetclock messages.
//!
//! All user-facing text lives here, so commands only ever deal with
//! structured `Message` values and the wording stays consistent.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleSheet => "Spreadsheet settings".to_string(),
            Message::SheetIdFromEnv => "Spreadsheet ID loaded from GOOGLE_SHEET".to_string(),
            Message::SheetIdFromConfig => "Spreadsheet ID loaded from configuration".to_string(),
            Message::SheetIdNotFound => "Spreadsheet ID not found in .env or configuration.".to_string(),
            Message::InvalidSheetUrl => "Invalid URL.".to_string(),

            // === AUTHENTICATION MESSAGES ===
            Message::Authorizing => "Authorizing...".to_string(),
            Message::Authorized => "Authorized".to_string(),
            Message::TokenRefreshed => "Access token refreshed".to_string(),
            Message::NotLoggedIn => "No cached Google token found. Run `sheetclock login` first.".to_string(),
            Message::CredentialsNotFound(path) => format!("OAuth client credentials not found at {}", path),
            Message::OpenConsentUrl(url) => format!("Open this URL in your browser to authorize access:\n\n{}\n", url),
            Message::WaitingForConsent(port) => format!("Waiting for the authorization redirect on port {}...", port),
            Message::LoginSucceeded(path) => format!("Google token saved to {}", path),
            Message::LoggedOut => "Cached Google token removed".to_string(),
            Message::AlreadyLoggedOut => "No cached Google token to remove".to_string(),

            // === RANGE MESSAGES ===
            Message::InvalidCellRange => "Invalid cell range.".to_string(),

            // === PIPELINE MESSAGES ===
            Message::FetchingRange(range) => format!("Fetching Google Sheets data for range {}...", range),
            Message::FetchFailed(error) => format!("Failed to fetch spreadsheet values: {}", error),
            Message::EmptyGrid(range) => format!("Range {} returned no rows", range),
            Message::NoUsersFound => "No user columns found in the header row".to_string(),
            Message::DuplicateUserColumn(user) => {
                format!("Column header {} appears more than once; only its last column is totalled", user)
            }
            Message::TotalsHeader(range) => format!("Totals by name for {}", range),
            Message::StepCompleted(step, elapsed) => format!("{}...OK! Elapsed time: {} ns", step, elapsed),
            Message::UnpairedTimestamps(user, count) => {
                format!("{} has {} clock-in without a clock-out; it was left out of the total", user, count)
            }
            Message::WritingRange(range) => format!("Writing totals to {}...", range),
            Message::WriteSucceeded(cells, range) => format!("Updated {} cells in {}", cells, range),
            Message::WriteFailed(error) => format!("An error occurred while writing totals: {}", error),
            Message::Exiting => "Exiting.".to_string(),

            // === PROMPTS ===
            Message::PromptSheetUrl => "Enter spreadsheet URL".to_string(),
            Message::PromptReadRange(default) => format!("Enter cell range (default {})", default),
            Message::PromptWriteRange(users) => {
                format!("Provide cell range with dimensions >= 2-wide and {}-high", users)
            }
            Message::PromptWriteCells => "Write to cells?".to_string(),
            Message::PromptDefaultReadRange => "Enter the default range to read".to_string(),
            Message::PromptDefaultWriteRange => "Enter the default range to write totals to (empty to always ask)".to_string(),
        };
        write!(f, "{}", text)
    }
}
