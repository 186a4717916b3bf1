use anyhow::{Result, bail};
use std::path::Path;

use crate::{
    commands::config::Config,
    package,
    registry::ResolveName,
    runtime::Runtime,
    style::{Style, paint},
};

/// Drop a package from the project while keeping its files on disk.
#[tracing::instrument(skip(config, project))]
pub fn unlink<R: Runtime, N: ResolveName>(
    config: &Config<R, N>,
    project: &Path,
    arguments: &[String],
) -> Result<()> {
    let [name] = arguments else {
        bail!("Usage: ethpm unlink <name>");
    };

    package::remove_package(&config.runtime, project, name, false)?;

    println!(
        "The \"{}\" package was successfully unlinked.",
        paint(name, Style::Emphasis)
    );

    Ok(())
}

/// Drop a package from the project and delete its files.
#[tracing::instrument(skip(config, project))]
pub fn remove<R: Runtime, N: ResolveName>(
    config: &Config<R, N>,
    project: &Path,
    arguments: &[String],
) -> Result<()> {
    let [name] = arguments else {
        bail!("Usage: ethpm remove <name>");
    };

    package::remove_package(&config.runtime, project, name, true)?;

    println!(
        "The \"{}\" package was successfully removed.",
        paint(name, Style::Emphasis)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MockResolveName;
    use crate::runtime::MockRuntime;

    fn mock_config(runtime: MockRuntime) -> Config<MockRuntime, MockResolveName> {
        Config {
            runtime,
            resolver: MockResolveName::new(),
            client: reqwest::Client::new(),
            data_root: None,
            registry_url: "http://localhost:1".to_string(),
        }
    }

    #[test]
    fn test_unlink_requires_name() {
        let config = mock_config(MockRuntime::new());

        let result = unlink(&config, Path::new("/project"), &[]);

        let message = result.unwrap_err().to_string();
        assert!(message.contains("Usage: ethpm unlink"));
    }

    #[test]
    fn test_remove_requires_name() {
        let config = mock_config(MockRuntime::new());

        let result = remove(
            &config,
            Path::new("/project"),
            &["a".to_string(), "b".to_string()],
        );

        let message = result.unwrap_err().to_string();
        assert!(message.contains("Usage: ethpm remove"));
    }

    #[test]
    fn test_remove_propagates_missing_package() {
        // An empty store means any name is NotFound

        let mut runtime = MockRuntime::new();
        runtime.expect_exists().returning(|_| false);

        let config = mock_config(runtime);

        let result = remove(&config, Path::new("/project"), &["math".to_string()]);

        let message = result.unwrap_err().to_string();
        assert!(message.contains("math"));
        assert!(message.contains("not installed"));
    }
}
