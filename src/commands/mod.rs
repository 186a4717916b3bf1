use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::{project::find_project_root, registry::ResolveName, runtime::Runtime};

pub mod config;

mod all;
mod install;
mod list;
mod paths;
mod remove;
mod show;

pub use all::all;
pub use install::install;
pub use list::list;
pub use remove::{remove, unlink};
pub use show::show;

use config::Config;

/// Build the default configuration and route a subcommand to its handler.
#[tracing::instrument(skip(runtime, data_root, registry_url))]
pub async fn dispatch<R: Runtime + 'static>(
    runtime: R,
    command: &str,
    arguments: &[String],
    data_root: Option<PathBuf>,
    registry_url: Option<String>,
) -> Result<()> {
    let config = Config::new(runtime, data_root, registry_url)?;
    run(command, arguments, config).await
}

/// Route a subcommand to its handler.
///
/// Unknown commands print a hint and exit cleanly; mistyping a subcommand is
/// a usability miss, not a process failure. Every command except `all` runs
/// against the nearest enclosing project.
#[tracing::instrument(skip(config))]
pub async fn run<R: Runtime + 'static, N: ResolveName>(
    command: &str,
    arguments: &[String],
    config: Config<R, N>,
) -> Result<()> {
    debug!(
        "Dispatching {:?} with {} argument(s)",
        command,
        arguments.len()
    );

    match command {
        "all" => all(&config).await,
        "list" => list(&config, &require_project(&config)?),
        "show" => show(&config, &require_project(&config)?, arguments),
        "install" => {
            let project = require_project(&config)?;
            install(&config, &project, arguments).await
        }
        "unlink" => unlink(&config, &require_project(&config)?, arguments),
        "remove" => remove(&config, &require_project(&config)?, arguments),
        _ => {
            println!("Invalid command. Try ethpm --help");
            Ok(())
        }
    }
}

/// Resolve the project root for commands that need one.
fn require_project<R: Runtime, N: ResolveName>(config: &Config<R, N>) -> Result<PathBuf> {
    let current_dir = config.runtime.current_dir()?;
    find_project_root(&config.runtime, &current_dir)
        .context("No ethpm project was found in this directory or any parent directory.")
}
