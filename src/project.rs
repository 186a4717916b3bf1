//! Project-root discovery.

use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Marker file that identifies a project root.
pub const PROJECT_MARKER: &str = "ethpm.json";

/// Walk upward from `start` looking for a directory containing the project
/// marker. Returns the first match, or `None` when the filesystem root is
/// reached without one.
#[tracing::instrument(skip(runtime, start))]
pub fn find_project_root<R: Runtime>(runtime: &R, start: &Path) -> Option<PathBuf> {
    let mut dir = start;
    loop {
        if runtime.exists(&dir.join(PROJECT_MARKER)) {
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}

/// Directory holding a project's installed packages and its store file.
pub fn packages_dir(project: &Path) -> PathBuf {
    project.join("packages")
}
