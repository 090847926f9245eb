//! Main entry point for opnotes.

use clap::Parser;
use opnotes::cli::Cli;
use opnotes::term::error_exit;

fn main() {
    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    // Sweep scratch files left by interrupted editor sessions
    let _ = opnotes::editor::cleanup_stale_scratch();

    let cli = Cli::parse();
    if let Err(e) = cli.execute() {
        error_exit(&e.to_string(), 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        // Test that CLI can be parsed without panicking
        let cli = Cli::try_parse_from(["opnotes", "edit"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["opnotes", "pdf", "/tmp"]);
        assert!(cli.is_ok());
    }
}
