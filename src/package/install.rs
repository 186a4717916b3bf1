//! Install and removal backend.
//!
//! Packages arrive as JSON manifests. Install resolves the manifest through
//! the global cache (fetching and caching it on a miss), verifies it, writes
//! the sources into the project and records the content checksum in the
//! store. Removal drops the store entry and optionally the files.

use log::{debug, info};
use std::path::Path;

use super::drift::hash_source_map;
use super::manifest::Manifest;
use super::store::{InstalledPackage, PackageStore};
use super::uri::PackageUri;
use super::BackendError;
use crate::project;
use crate::runtime::Runtime;

/// Install the package at `uri` into the project. Returns the canonical
/// package name from the manifest.
#[tracing::instrument(skip(runtime, client, project, cache_root))]
pub async fn install_package<R: Runtime>(
    runtime: &R,
    client: &reqwest::Client,
    project: &Path,
    cache_root: &Path,
    registry_url: &str,
    uri: &str,
    overwrite: bool,
) -> Result<String, BackendError> {
    let parsed: PackageUri = uri.parse()?;

    let manifest_text =
        cached_or_fetched_manifest(runtime, client, cache_root, registry_url, &parsed).await?;

    let manifest = Manifest::parse(&manifest_text)?;
    manifest.verify(&parsed.name)?;
    let name = manifest.package_name.clone();

    let mut store = PackageStore::load(runtime, project)?;
    if store.packages.contains_key(&name) && !overwrite {
        return Err(BackendError::AlreadyInstalled(name));
    }

    let target = project::packages_dir(project).join(&name);
    if runtime.exists(&target) {
        runtime.remove_dir_all(&target)?;
    }
    for (rel, content) in &manifest.sources {
        let dest = target.join(rel);
        if let Some(parent) = dest.parent() {
            runtime.create_dir_all(parent)?;
        }
        runtime.write(&dest, content.as_bytes())?;
    }

    store.packages.insert(
        name.clone(),
        InstalledPackage {
            source_uri: uri.to_string(),
            manifest_checksum: hash_source_map(&manifest.sources),
        },
    );
    store.save(runtime, project)?;

    info!("Installed package \"{}\" from {}", name, uri);
    Ok(name)
}

/// Remove `name` from the project store. With `delete_files` the package
/// directory is deleted as well; without it the cached files stay in place
/// (unlink).
#[tracing::instrument(skip(runtime, project))]
pub fn remove_package<R: Runtime>(
    runtime: &R,
    project: &Path,
    name: &str,
    delete_files: bool,
) -> Result<(), BackendError> {
    let mut store = PackageStore::load(runtime, project)?;
    if store.packages.remove(name).is_none() {
        return Err(BackendError::NotFound(name.to_string()));
    }
    store.save(runtime, project)?;

    if delete_files {
        let dir = project::packages_dir(project).join(name);
        if runtime.exists(&dir) {
            runtime.remove_dir_all(&dir)?;
        }
    }

    info!(
        "Removed package \"{}\" ({})",
        name,
        if delete_files {
            "files deleted"
        } else {
            "files kept"
        }
    );
    Ok(())
}

async fn cached_or_fetched_manifest<R: Runtime>(
    runtime: &R,
    client: &reqwest::Client,
    cache_root: &Path,
    registry_url: &str,
    uri: &PackageUri,
) -> Result<String, BackendError> {
    let manifest_path = cache_root
        .join(&uri.address)
        .join(format!("{}.json", uri.name));

    if runtime.exists(&manifest_path) {
        debug!("Using cached manifest at {}", manifest_path.display());
        return Ok(runtime.read_to_string(&manifest_path)?);
    }

    let text = fetch_manifest_text(client, registry_url, &uri.address, &uri.name).await?;

    let registry_dir = cache_root.join(&uri.address);
    runtime.create_dir_all(&registry_dir)?;
    runtime.write(&manifest_path, text.as_bytes())?;

    Ok(text)
}

#[tracing::instrument(skip(client))]
async fn fetch_manifest_text(
    client: &reqwest::Client,
    registry_url: &str,
    address: &str,
    name: &str,
) -> Result<String, BackendError> {
    let url = format!(
        "{}/{}/{}",
        registry_url.trim_end_matches('/'),
        address,
        name
    );
    debug!("Fetching manifest from {}...", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| BackendError::FetchFailed(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::FetchFailed(format!(
            "registry returned {status} for {url}"
        )));
    }

    response
        .text()
        .await
        .map_err(|e| BackendError::FetchFailed(format!("failed to read response from {url}: {e}")))
}
