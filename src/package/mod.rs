//! Package backend module
//!
//! This module provides the install/remove backend and its collaborators:
//! URI parsing, manifest handling, the per-project store, and drift
//! detection against recorded checksums.

mod drift;
mod error;
mod install;
mod manifest;
mod store;
mod uri;

pub use drift::get_installed_packages;
pub use error::BackendError;
pub use install::{install_package, remove_package};
pub use manifest::Manifest;
pub use store::{InstalledPackage, PackageStore};
pub use uri::PackageUri;
