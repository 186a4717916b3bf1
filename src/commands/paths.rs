use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Resolve the data root for this invocation, preferring an explicit override.
#[tracing::instrument(skip(runtime, data_root))]
pub fn resolve_data_root<R: Runtime>(runtime: &R, data_root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match data_root {
        Some(path) => path,
        None => default_data_root(runtime)?,
    };

    info!("Using data root: {}", root.display());

    Ok(root)
}

/// Get the default data root directory
#[tracing::instrument(skip(runtime))]
pub fn default_data_root<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if runtime.is_privileged() {
        Ok(system_data_root(runtime))
    } else {
        let home_dir = runtime
            .home_dir()
            .context("Could not find home directory")?;
        Ok(home_dir.join(".ethpm"))
    }
}

/// The global manifest cache lives in a `cache` directory under the data root.
pub fn cache_root(data_root: &Path) -> PathBuf {
    data_root.join("cache")
}

#[cfg(target_os = "macos")]
#[tracing::instrument(skip(_runtime))]
fn system_data_root<R: Runtime>(_runtime: &R) -> PathBuf {
    PathBuf::from("/opt/ethpm")
}

#[cfg(target_os = "windows")]
#[tracing::instrument(skip(_runtime))]
fn system_data_root<R: Runtime>(_runtime: &R) -> PathBuf {
    PathBuf::from(r"C:\ProgramData\ethpm")
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
#[tracing::instrument(skip(_runtime))]
fn system_data_root<R: Runtime>(_runtime: &R) -> PathBuf {
    PathBuf::from("/usr/local/ethpm")
}
