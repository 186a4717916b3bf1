use anyhow::{Result, bail};
use std::path::Path;

use crate::{
    commands::config::Config,
    commands::paths,
    package,
    registry::ResolveName,
    runtime::Runtime,
    style::{Style, paint},
};

/// Install a package into the current project from an erc1319 URI.
///
/// The optional second argument replaces an existing installation; it must be
/// the literal `true` or `false` (any case) and is rejected before the
/// backend runs.
#[tracing::instrument(skip(config, project))]
pub async fn install<R: Runtime, N: ResolveName>(
    config: &Config<R, N>,
    project: &Path,
    arguments: &[String],
) -> Result<()> {
    let (uri, overwrite) = match arguments {
        [uri] => (uri, false),
        [uri, overwrite] => (uri, parse_overwrite(overwrite)?),
        _ => bail!("Usage: ethpm install <uri> [overwrite=false]"),
    };

    println!(
        "Attempting to install package at \"{}\"",
        paint(uri, Style::Emphasis)
    );

    let data_root = paths::resolve_data_root(&config.runtime, config.data_root.clone())?;
    let cache_root = paths::cache_root(&data_root);

    let name = package::install_package(
        &config.runtime,
        &config.client,
        project,
        &cache_root,
        &config.registry_url,
        uri,
        overwrite,
    )
    .await?;

    println!(
        "The \"{}\" package was installed successfully.",
        paint(&name, Style::Emphasis)
    );

    Ok(())
}

/// Strict literal parse of the `overwrite` argument.
fn parse_overwrite(value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        bail!(
            "Invalid overwrite value \"{}\", expected \"true\" or \"false\"",
            value
        )
    }
}
