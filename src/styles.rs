//! Terminal text styling for help output.
//!
//! Styling is dropped when `NO_COLOR` is set.

/// ANSI escape code for bold text.
pub const BOLD: &str = "\x1b[1m";

/// ANSI escape code to reset all styling.
pub const RESET: &str = "\x1b[0m";

fn styling_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Wraps text in bold styling.
pub fn bold(text: &str) -> String {
    if styling_enabled() {
        format!("{BOLD}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Formats a definition list item with a bold term.
/// Matches clap's command list formatting (2-space indent, 13-char term width).
pub fn def(term: &str, description: &str) -> String {
    let padding = " ".repeat(13_usize.saturating_sub(term.len()));
    format!("  {}{padding}{description}", bold(term))
}
