//! Command-line interface implementation.

use crate::document;
use crate::editor;
use crate::error::Result;
use crate::export;
use crate::menu;
use crate::models::Vault;
use crate::op::OpClient;
use crate::process::{self, ProcessRunner, SystemRunner};
use crate::term::{advisory, success};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Edit 1Password secure notes in your editor or export them to PDF.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the Shared vault (default)
    #[arg(long, conflicts_with = "me")]
    pub family: bool,

    /// Use the Private vault
    #[arg(long)]
    pub me: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick a secure note and edit it in your editor
    Edit,

    /// Pick a secure note and export it as PDF
    Pdf {
        /// Directory to write the PDF into
        #[arg(default_value = ".")]
        output_dir: PathBuf,
    },
}

impl Cli {
    /// The vault scope selected for this invocation.
    pub fn vault(&self) -> Vault {
        if self.me {
            Vault::Private
        } else {
            Vault::Shared
        }
    }

    /// Execute the CLI command.
    pub fn execute(&self) -> Result<()> {
        process::require_tool("op", "op (1Password CLI)")?;

        let vault = self.vault();
        let client = OpClient::new(SystemRunner);

        match &self.command {
            None | Some(Commands::Edit) => self.edit_note(&client, vault),
            Some(Commands::Pdf { output_dir }) => self.export_note(&client, vault, output_dir),
        }
    }

    /// Edit flow: pick an item, edit its document, write back what changed.
    fn edit_note<R: ProcessRunner>(&self, client: &OpClient<R>, vault: Vault) -> Result<()> {
        advisory("Read https://support.1password.com/markdown/ before editing!");

        let items = client.list_secure_notes(vault)?;
        let item = menu::choose_item(vault, &items)?;
        let note = client.get_note(vault, &item)?;

        let edited = editor::edit_document(&note.document, &editor::resolve_editor())?;
        let Some(edited) = edited.filter(|doc| !doc.trim().is_empty()) else {
            advisory("No changes made");
            return Ok(());
        };

        let (edited_title, edited_value) = document::split(&edited);
        let title = (edited_title != note.title).then_some(edited_title.as_str());
        let value = (edited_value != note.value).then_some(edited_value.as_str());

        if client.update_item(vault, &item, title, value)? {
            success(&format!("Updated '{}'", item.title));
        } else {
            advisory("No changes made");
        }

        Ok(())
    }

    /// Export flow: pick an item and render its document to PDF.
    fn export_note<R: ProcessRunner>(
        &self,
        client: &OpClient<R>,
        vault: Vault,
        output_dir: &Path,
    ) -> Result<()> {
        export::ensure_tools()?;

        let items = client.list_secure_notes(vault)?;
        let item = menu::choose_item(vault, &items)?;
        let note = client.get_note(vault, &item)?;

        let output_path = export::write_pdf(client.runner(), &note, output_dir)?;
        success(&format!("Exported to {}", output_path.display()));
        export::launch_viewer(&output_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vault_is_shared() {
        let cli = Cli::try_parse_from(["opnotes"]).unwrap();
        assert_eq!(cli.vault(), Vault::Shared);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_vault_flags() {
        let cli = Cli::try_parse_from(["opnotes", "--family"]).unwrap();
        assert_eq!(cli.vault(), Vault::Shared);

        let cli = Cli::try_parse_from(["opnotes", "--me"]).unwrap();
        assert_eq!(cli.vault(), Vault::Private);
    }

    #[test]
    fn test_vault_flags_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["opnotes", "--family", "--me"]).is_err());
    }

    #[test]
    fn test_pdf_output_dir_defaults_to_cwd() {
        let cli = Cli::try_parse_from(["opnotes", "pdf"]).unwrap();
        match cli.command {
            Some(Commands::Pdf { output_dir }) => assert_eq!(output_dir, PathBuf::from(".")),
            other => panic!("expected pdf subcommand, got {other:?}"),
        }
    }

    #[test]
    fn test_pdf_output_dir_argument() {
        let cli = Cli::try_parse_from(["opnotes", "--me", "pdf", "/tmp/out"]).unwrap();
        assert_eq!(cli.vault(), Vault::Private);
        match cli.command {
            Some(Commands::Pdf { output_dir }) => {
                assert_eq!(output_dir, PathBuf::from("/tmp/out"))
            }
            other => panic!("expected pdf subcommand, got {other:?}"),
        }
    }
}
