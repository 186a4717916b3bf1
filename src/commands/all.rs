use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::{
    commands::config::Config,
    commands::paths,
    registry::{self, DisplayName, ResolveName},
    runtime::Runtime,
    style::Style,
    tree::{TreeSection, render_sections},
};

/// List every cached package, grouped by source registry.
///
/// Registries whose address resolves to a domain are headed
/// `erc1319://{domain}`; unresolvable addresses print as-is rather than
/// aborting the listing.
#[tracing::instrument(skip(config))]
pub async fn all<R: Runtime, N: ResolveName>(config: &Config<R, N>) -> Result<()> {
    let data_root = paths::resolve_data_root(&config.runtime, config.data_root.clone())?;
    let cache_root = paths::cache_root(&data_root);

    let sections = cache_sections(&config.runtime, &config.resolver, &cache_root).await?;
    for line in render_sections(&sections, |_| Style::Name) {
        println!("{}", line);
    }

    Ok(())
}

/// Build one renderable section per cached registry.
async fn cache_sections<R: Runtime, N: ResolveName>(
    runtime: &R,
    resolver: &N,
    cache_root: &Path,
) -> Result<Vec<TreeSection>> {
    let entries = registry::list_global_cache(runtime, cache_root)?;
    debug!("Found {} cached registries", entries.len());

    let mut sections = Vec::with_capacity(entries.len());
    for entry in entries {
        let (header, header_style) =
            match registry::resolve_display_name(resolver, &entry.address).await {
                DisplayName::Resolved(domain) => (format!("erc1319://{}", domain), Style::Emphasis),
                DisplayName::Fallback(address) => (address, Style::Plain),
            };
        sections.push(TreeSection {
            header,
            header_style,
            children: entry.children,
        });
    }

    Ok(sections)
}
