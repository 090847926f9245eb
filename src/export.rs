//! PDF export via pandoc.

use crate::error::Result;
use crate::models::Note;
use crate::process::{self, ProcessRunner};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Check that the converter and the PDF engine it drives are installed.
///
/// Runs before any vault interaction so a missing tool aborts the export
/// flow up front.
pub fn ensure_tools() -> Result<()> {
    process::require_tool("pandoc", "pandoc")?;
    process::require_tool("pdflatex", "pdflatex")?;
    Ok(())
}

/// Convert a note's document to `{output_dir}/{title}.pdf`.
pub fn write_pdf<R: ProcessRunner>(
    runner: &R,
    note: &Note,
    output_dir: &Path,
) -> Result<PathBuf> {
    let output_path = output_dir.join(format!("{}.pdf", note.title));
    let output_arg = output_path.to_string_lossy().into_owned();

    runner.run(
        "pandoc",
        &["-f", "markdown", "-t", "pdf", "-o", &output_arg],
        Some(&note.document),
    )?;

    Ok(output_path)
}

/// Open a file with the platform's default viewer, fire-and-forget.
///
/// A viewer that fails to launch is not a command failure.
pub fn launch_viewer(path: &Path) {
    #[cfg(target_os = "linux")]
    let _ = Command::new("xdg-open").arg(path).spawn();

    #[cfg(target_os = "macos")]
    let _ = Command::new("open").arg(path).spawn();

    #[cfg(target_os = "windows")]
    let _ = Command::new("cmd").args(["/C", "start", ""]).arg(path).spawn();
}
