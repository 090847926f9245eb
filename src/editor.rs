//! Scoped scratch files and the external editor session.
//!
//! Note bodies pass through a scratch file while the editor runs. The file
//! lives in a private temp directory, is wiped before deletion, and is
//! cleaned up on every exit path; a startup sweep removes leftovers from
//! interrupted sessions.

use crate::error::{NoteError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::SystemTime;
use zeroize::Zeroize;

/// Prefix for opnotes scratch files
const SCRATCH_PREFIX: &str = "opnotes-edit-";

/// Get the private scratch directory for opnotes
fn scratch_dir() -> Result<PathBuf> {
    let dir = std::env::temp_dir().join("opnotes");

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&dir)?.permissions();
        perms.set_mode(0o700);
        fs::set_permissions(&dir, perms)?;
    }

    Ok(dir)
}

/// Remove scratch files left behind by interrupted sessions.
pub fn cleanup_stale_scratch() -> Result<()> {
    let dir = scratch_dir()?;

    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(SCRATCH_PREFIX) {
            if let Ok(mut content) = fs::read(&path) {
                content.zeroize();
                let _ = fs::write(&path, &content);
            }
            let _ = fs::remove_file(&path);
        }
    }

    Ok(())
}

/// Scratch file holding note plaintext during an editor session.
pub struct ScratchFile {
    path: PathBuf,
    cleaned: bool,
}

impl ScratchFile {
    /// Create a new scratch file with the given extension hint.
    pub fn new(suffix: &str) -> Result<Self> {
        let dir = scratch_dir()?;

        let temp_file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(suffix)
            .tempfile_in(&dir)?;

        // Managed manually from here so the editor can reopen it by path.
        let (_file, path) = temp_file
            .keep()
            .map_err(|e| NoteError::Editor(format!("failed to persist scratch file: {e}")))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(Self {
            path,
            cleaned: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    pub fn modified(&self) -> Result<SystemTime> {
        Ok(fs::metadata(&self.path)?.modified()?)
    }

    /// Wipe and remove the scratch file.
    pub fn cleanup(&mut self) -> Result<()> {
        if !self.cleaned && self.path.exists() {
            if let Ok(mut content) = fs::read(&self.path) {
                content.zeroize();
                fs::write(&self.path, &content)?;
            }
            fs::remove_file(&self.path)?;
            self.cleaned = true;
        }
        Ok(())
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Resolve the editor command from the environment.
pub fn resolve_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        })
}

/// Run an editor session over the document and return the saved content.
///
/// The document is written to a markdown scratch file and the editor is run
/// to completion. An explicit save is required: if the file's modification
/// time is unchanged when the editor exits, the session is treated as
/// abandoned and `None` is returned. A multi-word editor command is split
/// into program and leading arguments; the scratch path is appended last.
pub fn edit_document(document: &str, editor: &str) -> Result<Option<String>> {
    let mut scratch = ScratchFile::new(".md")?;
    scratch.write(document)?;
    let before = scratch.modified()?;

    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| NoteError::Editor("editor command is empty".to_string()))?;

    let status = Command::new(program)
        .args(words)
        .arg(scratch.path())
        .status()
        .map_err(|e| NoteError::Editor(format!("failed to launch '{program}': {e}")))?;

    if !status.success() {
        scratch.cleanup()?;
        return Err(NoteError::Editor(format!(
            "'{program}' exited with status {}",
            status.code().unwrap_or(-1)
        )));
    }

    let content = if scratch.modified()? == before {
        None
    } else {
        Some(scratch.read()?)
    };
    scratch.cleanup()?;

    Ok(content)
}
