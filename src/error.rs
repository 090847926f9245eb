//! Error types for opnotes.

use thiserror::Error;

/// Main error type for note-editing operations.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Not installed: {0}")]
    MissingTool(String),

    #[error("{tool} exited with status {status}: {stderr}")]
    ExternalTool {
        tool: String,
        status: i32,
        stderr: String,
    },

    #[error("Failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },

    #[error("Unexpected response from op: {0}")]
    MalformedField(String),

    #[error("No secure notes in the {0} vault")]
    NoItems(String),

    #[error("Editor session failed: {0}")]
    Editor(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;
