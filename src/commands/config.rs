use anyhow::Result;
use reqwest::Client;
use std::path::PathBuf;

use crate::{
    registry::{DEFAULT_REGISTRY_URL, HttpResolver, ResolveName},
    runtime::Runtime,
};

/// Shared command context: the runtime, the HTTP pieces and the two
/// settings every handler may need. The data root stays unresolved until a
/// handler actually touches the global cache.
pub struct Config<R: Runtime, N: ResolveName> {
    pub runtime: R,
    pub resolver: N,
    pub client: Client,
    pub data_root: Option<PathBuf>,
    pub registry_url: String,
}

impl<R: Runtime> Config<R, HttpResolver> {
    pub fn new(
        runtime: R,
        data_root: Option<PathBuf>,
        registry_url: Option<String>,
    ) -> Result<Self> {
        let registry_url = registry_url.unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());

        let client = Client::builder().user_agent("ethpm-cli").build()?;
        let resolver = HttpResolver::new(client.clone(), Some(registry_url.clone()));

        Ok(Self {
            runtime,
            resolver,
            client,
            data_root,
            registry_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_config_new_defaults() {
        // Test that the default registry URL is used when none is given

        let runtime = MockRuntime::new();

        let config = Config::new(runtime, None, None).unwrap();

        assert_eq!(config.registry_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.resolver.registry_url, DEFAULT_REGISTRY_URL);
        assert_eq!(config.data_root, None);
    }

    #[test]
    fn test_config_new_with_overrides() {
        // Test that explicit root and registry URL flow through unchanged

        let runtime = MockRuntime::new();

        let config = Config::new(
            runtime,
            Some(PathBuf::from("/data")),
            Some("http://localhost:9000".to_string()),
        )
        .unwrap();

        assert_eq!(config.registry_url, "http://localhost:9000");
        assert_eq!(config.resolver.registry_url, "http://localhost:9000");
        assert_eq!(config.data_root, Some(PathBuf::from("/data")));
    }
}
