//! Tree-branch rendering for package listings.
//!
//! Formats package names as a flat, last-child-aware tree:
//! ```text
//!  ├─token
//!  ├─safe-math
//!  └─vesting
//! ```
//! The branch glyph depends only on position within the sequence. Styling is
//! supplied by the caller as a pure function from label to [`Style`], so the
//! same input always renders to the same bytes.

use crate::style::{Style, paint};

pub const LAST_BRANCH: &str = "\u{2514}\u{2500}"; // └─
pub const MID_BRANCH: &str = "\u{251c}\u{2500}"; // ├─

/// One rendered group in a two-level listing: a styled header line followed
/// by its branch lines.
pub struct TreeSection {
    pub header: String,
    pub header_style: Style,
    pub children: Vec<String>,
}

/// Format `names` as branch lines, in the given order.
///
/// The final element gets the closing glyph; every other element gets the
/// continuing glyph.
pub fn render_branches<F>(names: &[String], style_fn: F) -> Vec<String>
where
    F: Fn(&str) -> Style,
{
    let count = names.len();
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let is_last = i == count - 1;
            let glyph = if is_last { LAST_BRANCH } else { MID_BRANCH };
            format!(
                " {}{}",
                paint(glyph, Style::Branch),
                paint(name, style_fn(name))
            )
        })
        .collect()
}

/// Format a sequence of header-plus-children groups.
///
/// Each group restarts the last-element computation, so every group's final
/// child gets the closing glyph regardless of what follows.
pub fn render_sections<F>(sections: &[TreeSection], style_fn: F) -> Vec<String>
where
    F: Fn(&str) -> Style,
{
    let mut lines = Vec::new();
    for section in sections {
        lines.push(paint(&section.header, section.header_style));
        lines.extend(render_branches(&section.children, &style_fn));
    }
    lines
}
