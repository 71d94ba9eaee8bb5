//! Terminal prompts

use crate::error::CliResult;
use crate::session::MenuChoice;
use dialoguer::{Input, Select};

/// Ask for the next menu action
pub fn menu() -> CliResult<MenuChoice> {
    let index = Select::new()
        .with_prompt("Select an option")
        .items(&MenuChoice::ALL)
        .default(0)
        .interact()?;
    Ok(MenuChoice::ALL
        .get(index)
        .copied()
        .unwrap_or(MenuChoice::Exit))
}

/// Ask for a line of free text; blank input is allowed
pub fn text(prompt: &str) -> CliResult<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
