//! Numbered selection menu for vault items.

use crate::error::{NoteError, Result};
use crate::models::{Vault, VaultItem};
use dialoguer::Input;

/// Format one menu line per item: `{n:>2}. {title} ({updated_on})`.
///
/// Items are numbered contiguously from 1 in the order given; the caller
/// is expected to have sorted them already.
pub fn render_menu(items: &[VaultItem]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{:>2}. {} ({})", i + 1, item.title, item.updated_on()))
        .collect()
}

/// Print the menu and prompt until a valid 1-based selection is entered.
pub fn choose_item(vault: Vault, items: &[VaultItem]) -> Result<VaultItem> {
    if items.is_empty() {
        return Err(NoteError::NoItems(vault.to_string()));
    }

    for line in render_menu(items) {
        println!("{line}");
    }

    let max = items.len();
    let selection: String = Input::new()
        .with_prompt("Enter number of the one you want to edit")
        .validate_with(move |input: &String| -> std::result::Result<(), String> {
            match input.trim().parse::<usize>() {
                Ok(n) if (1..=max).contains(&n) => Ok(()),
                _ => Err(format!("Enter a number between 1 and {max}")),
            }
        })
        .interact_text()
        .map_err(|e| NoteError::Prompt(e.to_string()))?;

    let n: usize = selection
        .trim()
        .parse()
        .map_err(|e| NoteError::Prompt(format!("invalid selection: {e}")))?;
    Ok(items[n - 1].clone())
}
