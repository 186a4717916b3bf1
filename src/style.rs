//! ANSI styling tokens for terminal output.
//!
//! Styling is a pure mapping from token to escape-wrapped text. Callers pick
//! tokens; nothing here reads ambient state, so rendering the same input
//! always produces the same bytes.

use owo_colors::OwoColorize;

/// A display role for a piece of rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No styling at all.
    Plain,
    /// Tree branch glyphs.
    Branch,
    /// An installed package name in its normal state.
    Name,
    /// An installed package name whose files have drifted.
    Modified,
    /// Registry headers, counts and quoted package names.
    Emphasis,
    /// The prefix of a warning message.
    Warning,
}

/// Wrap `text` in the escape codes for `style`.
pub fn paint(text: &str, style: Style) -> String {
    match style {
        Style::Plain => text.to_string(),
        Style::Branch => text.bright_black().to_string(),
        Style::Name => text.bright_white().to_string(),
        Style::Modified => text.bright_blue().to_string(),
        Style::Emphasis => text.bright_magenta().to_string(),
        Style::Warning => text.bright_red().to_string(),
    }
}
