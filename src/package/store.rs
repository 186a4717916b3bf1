use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::project;
use crate::runtime::Runtime;

pub const STORE_FILE: &str = "installed.json";

/// One package linked into the project. The package name is the store key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InstalledPackage {
    pub source_uri: String,
    pub manifest_checksum: String,
}

/// The project's package store, persisted as
/// `<project>/packages/installed.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageStore {
    pub packages: BTreeMap<String, InstalledPackage>,
}

impl PackageStore {
    /// Read the store. A missing store file is an empty store; a corrupt one
    /// is an error.
    #[tracing::instrument(skip(runtime, project))]
    pub fn load<R: Runtime>(runtime: &R, project: &Path) -> Result<Self> {
        let path = store_path(project);
        if !runtime.exists(&path) {
            return Ok(Self::default());
        }
        let content = runtime.read_to_string(&path)?;
        serde_json::from_str(&content).context("Failed to parse the package store")
    }

    /// Write the store atomically (temp file, then rename).
    #[tracing::instrument(skip(self, runtime, project))]
    pub fn save<R: Runtime>(&self, runtime: &R, project: &Path) -> Result<()> {
        runtime.create_dir_all(&project::packages_dir(project))?;
        let path = store_path(project);
        let json = serde_json::to_string_pretty(self)?;
        let tmp_path = path.with_extension("json.tmp");
        runtime.write(&tmp_path, json.as_bytes())?;
        runtime.rename(&tmp_path, &path)?;
        Ok(())
    }
}

pub fn store_path(project: &Path) -> PathBuf {
    project::packages_dir(project).join(STORE_FILE)
}
