//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation.

use dialoguer::Confirm;

use crate::error::Result;

/// Ask the user to confirm a destructive action. Defaults to "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
