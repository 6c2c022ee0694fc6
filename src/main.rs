//! contract-deployer
//!
//! One-shot deployment runner: resolves a compiled contract artifact by
//! name, submits a single creation transaction, waits for confirmation,
//! and prints `"<name> deployed to: <address>"`.
//!
//! Exit codes: 0 on success, 1 on any failure. The failure is printed to
//! stderr exactly once; there is no retry and no rollback.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use contract_deployer::artifact::ArtifactStore;
use contract_deployer::blockchain::{DeployClient, Wallet};
use contract_deployer::config::{self, DeployerConfig};
use contract_deployer::deploy::{run_deployment, RpcBackend};
use contract_deployer::observability;

#[derive(Parser)]
#[command(name = "contract-deployer")]
#[command(about = "Deploys a compiled contract and prints its address", long_about = None)]
struct Cli {
    /// Contract to deploy; its <name>.json artifact must exist in the
    /// artifacts directory.
    #[arg(default_value = "MetaTransactionNetwork")]
    contract: String,

    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// JSON-RPC endpoint URL, overrides the config file.
    #[arg(long)]
    rpc_url: Option<String>,

    /// Expected chain ID, overrides the config file.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Directory holding compiled contract artifacts, overrides the config file.
    #[arg(long)]
    artifacts_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => DeployerConfig::default(),
    };

    if let Some(rpc_url) = cli.rpc_url {
        config.rpc.rpc_url = rpc_url;
    }
    if let Some(chain_id) = cli.chain_id {
        config.rpc.chain_id = chain_id;
    }
    if let Some(dir) = cli.artifacts_dir {
        config.artifacts.dir = dir;
    }

    // Overrides can invalidate a previously valid file, so validate again.
    config::validate_config(&config).map_err(config::ConfigError::Validation)?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        contract = %cli.contract,
        rpc_url = %config.rpc.rpc_url,
        chain_id = config.rpc.chain_id,
        artifacts_dir = %config.artifacts.dir.display(),
        "contract-deployer starting"
    );

    let wallet = Wallet::from_env(config.rpc.chain_id)?;
    let client = DeployClient::new(config.rpc.clone())?;
    client.verify_chain_id().await?;

    let store = ArtifactStore::new(config.artifacts.dir.clone());
    let backend = RpcBackend::new(store, client, wallet, config.deployment.clone());

    run_deployment(&backend, &cli.contract, &mut std::io::stdout()).await?;

    Ok(())
}
