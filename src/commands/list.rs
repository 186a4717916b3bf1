use anyhow::Result;
use std::path::Path;

use crate::{
    commands::config::Config,
    registry::{self, InstalledListing, ResolveName},
    runtime::Runtime,
    style::{Style, paint},
    tree,
};

/// List packages installed in the current project, flagging any whose files
/// have drifted since installation.
#[tracing::instrument(skip(config, project))]
pub fn list<R: Runtime, N: ResolveName>(config: &Config<R, N>, project: &Path) -> Result<()> {
    let listing = registry::list_installed(&config.runtime, project)?;

    for line in render_listing(&listing) {
        println!("{}", line);
    }

    Ok(())
}

/// Render the listing report: an optional drift warning, a count line, and
/// one branch per package.
fn render_listing(listing: &InstalledListing) -> Vec<String> {
    let mut lines = Vec::new();

    if !listing.modified.is_empty() {
        lines.push(format!(
            "{}: One or more files in {} packages have been modified since installation.",
            paint("WARNING", Style::Warning),
            listing.modified.len()
        ));
        lines.push("Unlink or reinstall them to silence this warning.".to_string());
        lines.push(format!(
            "Modified packages name are highlighted in {}.",
            paint("blue", Style::Modified)
        ));
        lines.push(String::new());
    }

    let names = listing.display_order();
    lines.push(format!(
        "Found {} installed packages:",
        paint(&listing.total().to_string(), Style::Emphasis)
    ));
    lines.extend(tree::render_branches(&names, |name| {
        if listing.is_modified(name) {
            Style::Modified
        } else {
            Style::Name
        }
    }));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{LAST_BRANCH, MID_BRANCH};
    use std::collections::BTreeSet;

    fn listing(installed: &[&str], modified: &[&str]) -> InstalledListing {
        InstalledListing {
            installed: installed.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
            modified: modified.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn test_render_listing_unions_and_flags() {
        // Packages reported in both sets must appear once, flagged modified

        let listing = listing(&["A", "B"], &["B", "C"]);

        let lines = render_listing(&listing);

        // --- Warning block: two modified packages ---

        assert!(lines[0].contains(&paint("WARNING", Style::Warning)));
        assert!(lines[0].contains("2 packages"));
        assert_eq!(lines[1], "Unlink or reinstall them to silence this warning.");
        assert!(lines[2].contains(&paint("blue", Style::Modified)));
        assert_eq!(lines[3], "");

        // --- Count covers the union, not the concatenation ---

        assert!(lines[4].contains(&paint("3", Style::Emphasis)));

        // --- One branch per unique name, sorted, drift flagged ---

        let branches = &lines[5..];
        assert_eq!(branches.len(), 3);
        assert!(branches[0].contains(&paint("A", Style::Name)));
        assert!(branches[1].contains(&paint("B", Style::Modified)));
        assert!(branches[2].contains(&paint("C", Style::Modified)));
        assert!(branches[2].contains(&paint(LAST_BRANCH, Style::Branch)));
        assert!(branches[0].contains(&paint(MID_BRANCH, Style::Branch)));
    }

    #[test]
    fn test_render_listing_no_drift_no_warning() {
        let listing = listing(&["math", "utils"], &[]);

        let lines = render_listing(&listing);

        assert!(lines[0].starts_with("Found "));
        assert!(lines[0].contains(&paint("2", Style::Emphasis)));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_render_listing_empty_project() {
        let listing = listing(&[], &[]);

        let lines = render_listing(&listing);

        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(&paint("0", Style::Emphasis)));
    }

    #[test]
    fn test_render_listing_line_count_matches_union() {
        // |installed ∪ modified| branches are printed, never more

        let listing = listing(&["A", "B", "C"], &["A", "B", "C"]);

        let lines = render_listing(&listing);
        let branch_count = lines
            .iter()
            .filter(|l| l.contains(&paint(LAST_BRANCH, Style::Branch)) || l.contains(&paint(MID_BRANCH, Style::Branch)))
            .count();

        assert_eq!(branch_count, listing.total());
    }
}
