//! Client for the 1Password CLI.
//!
//! Wraps the three op invocations the program needs: listing secure notes,
//! fetching a note body, and writing back changed fields. All calls are
//! blocking and scoped to an explicit vault.

use crate::error::{NoteError, Result};
use crate::models::{Note, Vault, VaultItem};
use crate::process::ProcessRunner;
use serde::Deserialize;

/// The note field op stores secure-note bodies under.
const NOTE_FIELD: &str = "notesPlain";

#[derive(Deserialize)]
struct NoteField {
    value: String,
}

/// Operations against the op CLI.
pub struct OpClient<R: ProcessRunner> {
    runner: R,
}

impl<R: ProcessRunner> OpClient<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// List all secure-note items in the vault, sorted ascending by title.
    pub fn list_secure_notes(&self, vault: Vault) -> Result<Vec<VaultItem>> {
        let output = self.runner.run(
            "op",
            &[
                "item",
                "list",
                "--format",
                "json",
                "--categories",
                "Secure Note",
                "--vault",
                vault.as_str(),
            ],
            None,
        )?;

        let mut items: Vec<VaultItem> = serde_json::from_str(&output.stdout)
            .map_err(|e| NoteError::MalformedField(format!("item list is not valid JSON: {e}")))?;
        items.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(items)
    }

    /// Fetch the plaintext note body for an item and assemble its document.
    pub fn get_note(&self, vault: Vault, item: &VaultItem) -> Result<Note> {
        let output = self.runner.run(
            "op",
            &[
                "item",
                "get",
                &item.id,
                "--format",
                "json",
                "--fields",
                NOTE_FIELD,
                "--vault",
                vault.as_str(),
            ],
            None,
        )?;

        let field: NoteField = serde_json::from_str(&output.stdout).map_err(|e| {
            NoteError::MalformedField(format!("item {} has no {NOTE_FIELD} field: {e}", item.id))
        })?;

        Ok(Note::new(item.title.clone(), field.value.trim()))
    }

    /// Write changed fields back to an item.
    ///
    /// Only the fields passed as `Some` are sent; when both are `None` no
    /// op call is issued at all. Returns whether an update was issued.
    pub fn update_item(
        &self,
        vault: Vault,
        item: &VaultItem,
        title: Option<&str>,
        value: Option<&str>,
    ) -> Result<bool> {
        if title.is_none() && value.is_none() {
            return Ok(false);
        }

        let mut args = vec![
            "item".to_string(),
            "edit".to_string(),
            item.id.clone(),
            "--vault".to_string(),
            vault.as_str().to_string(),
        ];
        if let Some(title) = title {
            args.push("--title".to_string());
            args.push(title.to_string());
        }
        if let Some(value) = value {
            args.push(format!("{NOTE_FIELD}={value}"));
        }

        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        self.runner.run("op", &arg_refs, None)?;
        Ok(true)
    }
}
