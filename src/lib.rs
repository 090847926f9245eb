//! opnotes: edit 1Password secure notes in your editor or export them to PDF.

pub mod cli;
pub mod document;
pub mod editor;
pub mod error;
pub mod export;
pub mod menu;
pub mod models;
pub mod op;
pub mod process;
pub mod term;

// Re-export commonly used types
pub use error::{NoteError, Result};
pub use models::{Note, Vault, VaultItem};
pub use op::OpClient;
