//! Terminal output formatting for the varspec CLI.
//!
//! Provides consistent, colored output using the [`console`] crate.

use console::style;

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning prefixed with yellow `[WARN]`.
///
/// Multi-line text keeps its layout: continuation lines are aligned under the
/// first character after the tag.
pub fn print_warning(text: &str) {
    let tag = "[WARN]";
    let padding = " ".repeat(tag.len() + 1);
    let mut lines = text.lines();
    if let Some(first) = lines.next() {
        eprintln!("{} {}", style(tag).yellow().bold(), first);
    }
    for line in lines {
        eprintln!("{padding}{line}");
    }
}
