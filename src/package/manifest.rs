use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};

use super::BackendError;

/// A cached ethPM-style package manifest.
///
/// The manifest carries the package sources inline, mapping relative paths to
/// file contents. Unknown fields (such as `manifest_version`) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Manifest {
    pub package_name: String,
    pub version: String,
    pub sources: BTreeMap<String, String>,
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self, BackendError> {
        serde_json::from_str(text).map_err(|e| {
            BackendError::VerificationFailed(format!("manifest is not valid JSON: {e}"))
        })
    }

    /// Structural checks before any manifest content touches the project.
    #[tracing::instrument(skip(self))]
    pub fn verify(&self, expected_name: &str) -> Result<(), BackendError> {
        if self.package_name.is_empty() {
            return Err(BackendError::VerificationFailed(
                "manifest has an empty package_name".to_string(),
            ));
        }
        if self.package_name != expected_name {
            return Err(BackendError::VerificationFailed(format!(
                "manifest is for \"{}\", expected \"{}\"",
                self.package_name, expected_name
            )));
        }
        if self.sources.is_empty() {
            return Err(BackendError::VerificationFailed(
                "manifest contains no sources".to_string(),
            ));
        }
        for path in self.sources.keys() {
            if !is_plain_relative(path) {
                return Err(BackendError::VerificationFailed(format!(
                    "source path \"{path}\" is not a plain relative path"
                )));
            }
        }
        Ok(())
    }
}

// Only `a/b/c`-shaped paths may be written under the package directory.
fn is_plain_relative(path: &str) -> bool {
    !path.is_empty()
        && Path::new(path)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}
