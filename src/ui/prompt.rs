//! Interactive prompts

use dialoguer::Password;

use crate::error::Result;

/// Prompt for a password without echoing it
pub fn prompt_password(username: &str) -> Result<String> {
    let password = Password::new()
        .with_prompt(format!("Password for {}", username))
        .interact()?;
    Ok(password)
}
