//! Registry display-name resolution.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_REGISTRY_URL: &str = "https://registry.ethpm.com";

/// Resolves a registry address to its human-readable domain name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResolveName: Send + Sync {
    async fn resolve(&self, address: &str) -> Result<String>;
}

pub struct HttpResolver {
    pub client: Client,
    pub registry_url: String,
}

impl HttpResolver {
    #[tracing::instrument(skip(client, registry_url))]
    pub fn new(client: Client, registry_url: Option<String>) -> Self {
        let registry_url = registry_url.unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
        Self {
            client,
            registry_url,
        }
    }
}

#[derive(Deserialize, Debug)]
struct DomainResponse {
    domain: String,
}

#[async_trait]
impl ResolveName for HttpResolver {
    #[tracing::instrument(skip(self))]
    async fn resolve(&self, address: &str) -> Result<String> {
        let url = format!(
            "{}/domains/{}",
            self.registry_url.trim_end_matches('/'),
            address
        );
        debug!("Resolving registry domain from {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to the registry")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Registry returned {} for {}", status, url);
        }

        let body: DomainResponse = response
            .json()
            .await
            .context("Failed to parse the registry domain response")?;
        if body.domain.is_empty() {
            bail!("Registry returned an empty domain for {}", address);
        }
        Ok(body.domain)
    }
}

/// A display name for a registry address. Resolution failure is an expected
/// branch and keeps the raw address for fallback display.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayName {
    Resolved(String),
    Fallback(String),
}

impl DisplayName {
    /// The string to show. Never empty.
    pub fn as_str(&self) -> &str {
        match self {
            DisplayName::Resolved(name) | DisplayName::Fallback(name) => name,
        }
    }
}

/// Resolve `address` for display. Any resolver failure (unknown address,
/// unreachable registry, malformed response) degrades to the raw address so
/// one bad registry never aborts the listing of the rest.
#[tracing::instrument(skip(resolver))]
pub async fn resolve_display_name<N: ResolveName>(resolver: &N, address: &str) -> DisplayName {
    match resolver.resolve(address).await {
        Ok(domain) => DisplayName::Resolved(domain),
        Err(err) => {
            debug!("Could not resolve a domain for {}: {:#}", address, err);
            DisplayName::Fallback(address.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_http_resolver_resolves_domain() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/domains/0xAB")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"domain": "snakecharmers.eth"}"#)
            .create_async()
            .await;

        let resolver = HttpResolver::new(Client::new(), Some(server.url()));
        let domain = resolver.resolve("0xAB").await.unwrap();

        mock.assert_async().await;
        assert_eq!(domain, "snakecharmers.eth");
    }

    #[tokio::test]
    async fn test_http_resolver_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/domains/0xAB")
            .with_status(404)
            .create_async()
            .await;

        let resolver = HttpResolver::new(Client::new(), Some(server.url()));
        let result = resolver.resolve("0xAB").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_http_resolver_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/domains/0xAB")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let resolver = HttpResolver::new(Client::new(), Some(server.url()));
        assert!(resolver.resolve("0xAB").await.is_err());
    }

    #[tokio::test]
    async fn test_http_resolver_empty_domain() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/domains/0xAB")
            .with_status(200)
            .with_body(r#"{"domain": ""}"#)
            .create_async()
            .await;

        let resolver = HttpResolver::new(Client::new(), Some(server.url()));
        assert!(resolver.resolve("0xAB").await.is_err());
    }

    #[test]
    fn test_http_resolver_default_url() {
        let resolver = HttpResolver::new(Client::new(), None);
        assert_eq!(resolver.registry_url, DEFAULT_REGISTRY_URL);
    }

    #[tokio::test]
    async fn test_resolve_display_name_success() {
        let mut resolver = MockResolveName::new();
        resolver
            .expect_resolve()
            .returning(|_| Ok("snakecharmers.eth".to_string()));

        let name = resolve_display_name(&resolver, "0xAB").await;
        assert_eq!(name, DisplayName::Resolved("snakecharmers.eth".to_string()));
    }

    #[tokio::test]
    async fn test_resolve_display_name_swallows_failures() {
        // Any resolver failure degrades to the raw address.
        let mut resolver = MockResolveName::new();
        resolver
            .expect_resolve()
            .returning(|_| Err(anyhow::anyhow!("registry unreachable")));

        let name = resolve_display_name(&resolver, "0xDEADBEEF").await;
        assert_eq!(name, DisplayName::Fallback("0xDEADBEEF".to_string()));
        assert!(!name.as_str().is_empty());
    }
}
