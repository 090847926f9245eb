//! Terminal feedback helpers.

use colored::*;

/// Print an error message and exit.
pub fn error_exit(message: &str, code: i32) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), message);
    std::process::exit(code);
}

/// Print a success message.
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an informational message to stderr.
pub fn advisory(message: &str) {
    eprintln!("{}", message.yellow());
}
