//! Unified output formatting utilities for consistent CLI presentation.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, yellow for warnings, green for success
//! - **Stdout only**: user-facing messages go to stdout; logs go to stderr
//! - **Plain text survives**: the words are the same with colors disabled

use colored::*;
use std::io::{self, Write};

/// Prints a failed action or invalid input, padded by blank lines
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a non-fatal notice
///
/// # Format
/// ```text
/// ! <message>
/// ```
pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow(), message.white());
}

/// Prints a batch summary or other completed action
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("{}", message.white());
}

/// Formats and prints a section header
///
/// # Format
/// ```text
///
/// <header>
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}", header.bold());
}

/// Prints a prompt without a trailing newline
pub fn print_prompt(prompt: &str) {
    print!("{prompt}");
    if let Err(e) = io::stdout().flush() {
        log::warn!("Failed to flush stdout: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Copy error: permission denied");
    }

    #[test]
    fn test_print_warning_does_not_panic() {
        print_warning("Cannot navigate into a file");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("2 file(s) copied");
    }

    #[test]
    fn test_print_info_and_header_do_not_panic() {
        print_info("Goodbye!");
        print_section_header("--- File Explorer ---");
        print_prompt("Your choice: ");
    }
}
