use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use maneki_deployer::{
    config::DeployConfig,
    module::{parse_overrides, Module},
    runner,
};

#[derive(Parser, Debug)]
#[command(name = "maneki-deploy", version, about = "Deploy Maneki modules to a simulated chain")]
struct Cli {
    /// Network profiles file.
    #[arg(long, default_value = "networks.toml")]
    config: PathBuf,

    /// Network profile to deploy to.
    #[arg(long)]
    network: String,

    /// Directory holding the per-network deployment ledgers.
    #[arg(long, default_value = "state")]
    state_dir: PathBuf,

    /// Module to deploy.
    #[arg(long, default_value = "token")]
    module: String,

    /// Override a module parameter. Format: "name=value".
    #[arg(long = "param", value_name = "NAME=VALUE")]
    params: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("deployment failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = DeployConfig::load(&cli.config)?;
    let module = Module::from_name(&cli.module)?;
    let overrides = parse_overrides(&cli.params)?;

    let address = runner::run_module(&config, &cli.network, &cli.state_dir, module, &overrides)?;

    // the deployed address is the script's one output
    println!("{address}");
    Ok(())
}
