//! Synchronous invocation of external tools.

use crate::error::{NoteError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Captured result of a finished external process.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub exit_code: i32,
}

/// Blocking process runner.
///
/// Every invocation runs to completion before returning; a non-zero exit
/// is an error carrying the tool's stderr diagnostic. The trait exists so
/// unit tests can substitute a recording fake.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<ProcessOutput>;
}

/// Runner backed by `std::process::Command`.
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], stdin: Option<&str>) -> Result<ProcessOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|e| NoteError::Spawn {
            tool: program.to_string(),
            source: e,
        })?;

        if let Some(input) = stdin {
            if let Some(mut pipe) = child.stdin.take() {
                pipe.write_all(input.as_bytes())?;
            }
        }

        let output = child.wait_with_output()?;
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            return Err(NoteError::ExternalTool {
                tool: program.to_string(),
                status: exit_code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code,
        })
    }
}

/// Check that an external tool is discoverable on PATH.
///
/// `label` is the name reported to the user, e.g. `op (1Password CLI)`.
pub fn require_tool(binary: &str, label: &str) -> Result<()> {
    which::which(binary)
        .map(|_| ())
        .map_err(|_| NoteError::MissingTool(label.to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_run_captures_stdout() {
        let out = SystemRunner.run("sh", &["-c", "echo hello"], None).unwrap();
        assert_eq!(out.stdout, "hello\n");
        assert_eq!(out.exit_code, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_run_pipes_stdin() {
        let out = SystemRunner.run("sh", &["-c", "cat"], Some("piped")).unwrap();
        assert_eq!(out.stdout, "piped");
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_external_tool_error() {
        let err = SystemRunner
            .run("sh", &["-c", "echo oops >&2; exit 3"], None)
            .unwrap_err();
        match err {
            NoteError::ExternalTool {
                tool,
                status,
                stderr,
            } => {
                assert_eq!(tool, "sh");
                assert_eq!(status, 3);
                assert_eq!(stderr, "oops");
            }
            other => panic!("expected ExternalTool, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let err = SystemRunner
            .run("definitely-not-a-real-binary-7f3a", &[], None)
            .unwrap_err();
        assert!(matches!(err, NoteError::Spawn { .. }));
    }

    #[test]
    fn test_require_tool_reports_label() {
        let err = require_tool("definitely-not-a-real-binary-7f3a", "frob (Frob CLI)")
            .unwrap_err();
        assert_eq!(err.to_string(), "Not installed: frob (Frob CLI)");
    }
}
