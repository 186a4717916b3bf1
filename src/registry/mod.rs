//! Local registry cache introspection and name resolution.

mod resolver;
mod scanner;

pub use resolver::{
    DEFAULT_REGISTRY_URL, DisplayName, HttpResolver, ResolveName, resolve_display_name,
};
pub use scanner::{CacheEntry, InstalledListing, list_global_cache, list_installed};

#[cfg(test)]
pub use resolver::MockResolveName;
