//! Log-message decoration
//!
//! Highlights action markers in free text for terminal output, using the
//! `colored` crate (which honors `NO_COLOR` and non-tty output by falling
//! back to plain text).

use colored::Colorize;

/// Highlight the first `TODO:` marker in a line with a yellow background
///
/// The marker is re-rendered as ` TODO: ` with a yellow background; lines
/// without a marker pass through unchanged.
pub fn highlight_todo(line: &str) -> String {
    line.replacen("TODO:", &" TODO: ".on_yellow().to_string(), 1)
}

/// Merge message lines into one string, decorating each line's markers
///
/// # Example
///
/// ```rust
/// use trade_toolkit::messages::merge_messages;
///
/// colored::control::set_override(false);
/// let merged = merge_messages(&[
///     "TODO: close overnight position".to_string(),
///     " filled at 17500".to_string(),
/// ]);
/// assert_eq!(merged, " TODO:  close overnight position filled at 17500");
/// ```
pub fn merge_messages(lines: &[String]) -> String {
    lines.iter().map(|line| highlight_todo(line)).collect()
}
