use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::{commands::config::Config, registry::ResolveName, runtime::Runtime};

/// Show detailed information about a package.
///
/// Not implemented yet: the command is accepted so scripts can probe for it,
/// but it prints nothing.
/// TODO: render the cached manifest (name, version, source paths) for a URI.
#[tracing::instrument(skip(config, project))]
pub fn show<R: Runtime, N: ResolveName>(
    config: &Config<R, N>,
    project: &Path,
    arguments: &[String],
) -> Result<()> {
    let _ = config;
    debug!(
        "show invoked for {} with {} argument(s), not implemented",
        project.display(),
        arguments.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MockResolveName;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_show_accepts_any_arguments() {
        let config = Config {
            runtime: MockRuntime::new(),
            resolver: MockResolveName::new(),
            client: reqwest::Client::new(),
            data_root: None,
            registry_url: "http://localhost:1".to_string(),
        };

        assert!(show(&config, Path::new("/project"), &[]).is_ok());
        assert!(show(&config, Path::new("/project"), &["erc1319://0xAB/math".to_string()]).is_ok());
    }
}
