//! Global-cache and project-store scanning.
//!
//! Directory structure of the global cache: `<cache_root>/<address>/<name>.json`,
//! one directory per source registry, one manifest file per cached package.

use anyhow::Result;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

use crate::package;
use crate::runtime::Runtime;

/// One registry directory in the global cache.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub address: String,
    pub children: Vec<String>,
}

/// Scan the global cache and return one entry per registry address, ordered
/// by address, each with its cached package names sorted.
///
/// Listing mutates the cache: a registry directory found empty is deleted on
/// the spot instead of being returned. This is intentional cache hygiene;
/// install recreates the directory when a package from that registry is
/// fetched again. A missing cache root yields an empty listing.
#[tracing::instrument(skip(runtime, cache_root))]
pub fn list_global_cache<R: Runtime>(runtime: &R, cache_root: &Path) -> Result<Vec<CacheEntry>> {
    let mut entries = Vec::new();

    if !runtime.exists(cache_root) {
        return Ok(entries);
    }

    let mut registry_dirs = runtime.read_dir(cache_root)?;
    registry_dirs.sort();

    for registry_dir in registry_dirs {
        if !runtime.is_dir(&registry_dir) {
            continue;
        }
        let Some(address) = registry_dir.file_name() else {
            continue;
        };
        let address = address.to_string_lossy().into_owned();

        let children_paths = runtime.read_dir(&registry_dir)?;
        if children_paths.is_empty() {
            debug!("Pruning empty registry directory {}", registry_dir.display());
            runtime.remove_dir(&registry_dir)?;
            continue;
        }

        // Only manifest files count as cached packages. Anything else keeps
        // the directory alive but stays out of the listing.
        let mut children: Vec<String> = children_paths
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "json"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        if children.is_empty() {
            continue;
        }
        children.sort();

        entries.push(CacheEntry { address, children });
    }

    Ok(entries)
}

/// Classified view of a project's installed packages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstalledListing {
    pub installed: BTreeSet<String>,
    pub modified: BTreeSet<String>,
}

impl InstalledListing {
    /// Sorted union of both sets, each name exactly once.
    pub fn display_order(&self) -> Vec<String> {
        self.installed.union(&self.modified).cloned().collect()
    }

    /// Number of distinct packages across both sets.
    pub fn total(&self) -> usize {
        self.installed.union(&self.modified).count()
    }

    pub fn is_modified(&self, name: &str) -> bool {
        self.modified.contains(name)
    }
}

/// List the project's packages classified by drift state.
#[tracing::instrument(skip(runtime, project))]
pub fn list_installed<R: Runtime>(runtime: &R, project: &Path) -> Result<InstalledListing> {
    let (installed, modified) = package::get_installed_packages(runtime, project)?;
    Ok(InstalledListing {
        installed,
        modified,
    })
}
