//! Drift detection for installed packages.
//!
//! Every listing recomputes each package's content checksum from disk and
//! compares it to the checksum recorded at install time. Classification is
//! never cached.

use anyhow::Result;
use log::warn;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::store::PackageStore;
use crate::project;
use crate::runtime::Runtime;

/// Checksum of package content given as an in-memory source map.
///
/// Files contribute in lexicographic path order; each file adds its relative
/// path bytes, a NUL separator, its content bytes and a trailing newline.
/// Agrees with [`hash_package_dir`] for identical content.
pub fn hash_source_map(sources: &BTreeMap<String, String>) -> String {
    let mut hasher = Sha256::new();
    for (path, content) in sources {
        feed(&mut hasher, path, content);
    }
    hex::encode(hasher.finalize())
}

/// Checksum of package content read from disk. Same scheme as
/// [`hash_source_map`].
#[tracing::instrument(skip(runtime, dir))]
pub fn hash_package_dir<R: Runtime>(runtime: &R, dir: &Path) -> Result<String> {
    let mut files = Vec::new();
    collect_files(runtime, dir, &mut files)?;

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        // Separators are normalized so the digest matches the source map
        // regardless of platform.
        let rel = path
            .strip_prefix(dir)?
            .to_string_lossy()
            .replace('\\', "/");
        let content = runtime.read_to_string(&path)?;
        entries.push((rel, content));
    }
    entries.sort();

    let mut hasher = Sha256::new();
    for (path, content) in &entries {
        feed(&mut hasher, path, content);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn feed(hasher: &mut Sha256, path: &str, content: &str) {
    hasher.update(path.as_bytes());
    hasher.update([0u8]);
    hasher.update(content.as_bytes());
    hasher.update([b'\n']);
}

fn collect_files<R: Runtime>(runtime: &R, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in runtime.read_dir(dir)? {
        if runtime.is_dir(&entry) {
            collect_files(runtime, &entry, out)?;
        } else {
            out.push(entry);
        }
    }
    Ok(())
}

/// Classify every package in the project store as installed (content matches
/// its recorded checksum) or modified.
///
/// A missing or unreadable package directory counts as modified rather than
/// failing the listing.
#[tracing::instrument(skip(runtime, project))]
pub fn get_installed_packages<R: Runtime>(
    runtime: &R,
    project: &Path,
) -> Result<(BTreeSet<String>, BTreeSet<String>)> {
    let store = PackageStore::load(runtime, project)?;
    let mut installed = BTreeSet::new();
    let mut modified = BTreeSet::new();

    for (name, package) in &store.packages {
        let dir = project::packages_dir(project).join(name);
        if !runtime.exists(&dir) {
            modified.insert(name.clone());
            continue;
        }
        match hash_package_dir(runtime, &dir) {
            Ok(checksum) if checksum == package.manifest_checksum => {
                installed.insert(name.clone());
            }
            Ok(_) => {
                modified.insert(name.clone());
            }
            Err(err) => {
                warn!("Could not read the \"{name}\" package: {err:#}");
                modified.insert(name.clone());
            }
        }
    }

    Ok((installed, modified))
}
