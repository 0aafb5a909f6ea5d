//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt for a path to an existing file
pub fn prompt_file_path(message: &str) -> Result<PathBuf> {
    let path: String = Input::new()
        .with_prompt(message)
        .validate_with(|input: &String| -> Result<(), &str> {
            if Path::new(input.trim()).is_file() {
                Ok(())
            } else {
                Err("File does not exist")
            }
        })
        .interact_text()?;
    Ok(PathBuf::from(path.trim()))
}

/// Prompt to pick a column label from the header.
/// `default` is the pre-selected position in `headers`.
pub fn select_column(message: &str, headers: &[String], default: usize) -> Result<String> {
    let choice = Select::new()
        .with_prompt(message)
        .items(headers)
        .default(default.min(headers.len().saturating_sub(1)))
        .interact()?;
    Ok(headers[choice].clone())
}

/// Prompt to pick an optional column label; the first entry skips the column.
/// `default` is the pre-selected position in `headers`, when it exists.
pub fn select_optional_column(
    message: &str,
    headers: &[String],
    default: Option<usize>,
) -> Result<Option<String>> {
    let mut items = vec!["<none>".to_string()];
    items.extend(headers.iter().cloned());

    let default_index = default
        .map(|position| position + 1)
        .filter(|index| *index < items.len())
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt(message)
        .items(&items)
        .default(default_index)
        .interact()?;

    if choice == 0 {
        Ok(None)
    } else {
        Ok(Some(headers[choice - 1].clone()))
    }
}

/// Prompt for an output file name with an editable default
pub fn prompt_output_path(message: &str, default: &str) -> Result<PathBuf> {
    let name: String = Input::new()
        .with_prompt(message)
        .default(default.to_string())
        .interact_text()?;
    Ok(PathBuf::from(name.trim()))
}
