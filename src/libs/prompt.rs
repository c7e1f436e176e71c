//! Interactive prompts shared by the commands.

use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Asks until `is_valid` accepts the (trimmed) answer.
///
/// Empty input falls back to `default` when one is given. A rejected answer
/// shows `error` and asks again.
pub fn prompt_until<P>(prompt: &str, default: Option<&str>, is_valid: P, error: &str) -> Result<String>
where
    P: Fn(&str) -> bool,
{
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }

    let answer = input
        .validate_with(|value: &String| -> Result<(), String> {
            match is_valid(value.trim()) {
                true => Ok(()),
                false => Err(error.to_string()),
            }
        })
        .interact_text()?;

    Ok(answer.trim().to_string())
}

/// Yes/no question defaulting to "no".
pub fn confirm(message: Message) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .default(false)
        .interact()?)
}
