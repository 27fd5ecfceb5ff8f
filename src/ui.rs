//! Formatting functions for terminal output.
//!
//! Display logic is separated from orchestration so it stays pure
//! (no side effects beyond printing) and testable. The tool is
//! non-interactive; there are no prompts.

use crate::warning::PackagingWarning;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal packaging warning.
pub fn display_warning(warning: &PackagingWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow().bold(), warning);
}

/// Display the resolved release inputs and the canonical version they
/// normalized to.
pub fn display_version_resolution(raw_version: &str, branch: &str, canonical: &str) {
    println!("{}", style("Release version").bold());
    println!("  Upstream: {} (branch: {})", raw_version, branch);
    println!("  Canonical: {}", style(canonical).green());
}
