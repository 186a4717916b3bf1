use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// ethpm - Ethereum smart contract package manager
///
/// Commands:
///   list                             List packages installed in this project
///   install <uri> [overwrite=false]  Install a package in this project
///   unlink <name>                    Unlink a package in this project
///   remove <name>                    Remove an installed package from this project
///   show <uri>                       Show detailed information about a package
///   all                              List all locally available packages
#[derive(Parser, Debug)]
#[command(author, version = env!("ETHPM_VERSION"), about, verbatim_doc_comment)]
struct Cli {
    /// The subcommand to run
    #[arg(value_name = "COMMAND")]
    command: String,

    /// Arguments for the subcommand
    #[arg(value_name = "ARGUMENTS")]
    arguments: Vec<String>,

    /// Data root directory (overrides defaults; also via ETHPM_ROOT)
    #[arg(
        long = "root",
        short = 'r',
        env = "ETHPM_ROOT",
        value_name = "PATH",
        global = true
    )]
    pub data_root: Option<PathBuf>,

    /// Package registry URL (defaults to https://registry.ethpm.com)
    #[arg(
        long = "registry-url",
        env = "ETHPM_REGISTRY_URL",
        value_name = "URL",
        global = true
    )]
    pub registry_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = ethpm::runtime::RealRuntime;

    ethpm::commands::dispatch(
        runtime,
        &cli.command,
        &cli.arguments,
        cli.data_root,
        cli.registry_url,
    )
    .await?;

    Ok(())
}
