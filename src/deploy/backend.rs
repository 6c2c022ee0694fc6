//! The collaborator seam: factory resolution, broadcast, confirmation.
//!
//! # Responsibilities
//! - Build the creation transaction with proper gas bounds
//! - Sign locally and broadcast exactly once
//! - Poll the receipt until the configured confirmation depth

use std::future::Future;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::rpc::types::TransactionRequest;
use tokio::time::{interval, timeout};

use crate::artifact::ArtifactStore;
use crate::blockchain::{ChainError, DeployClient, Wallet};
use crate::config::DeploymentConfig;
use crate::deploy::types::{
    ContractFactory, DeployError, DeployResult, DeployedContract, PendingDeployment,
};

/// The three collaborator operations of a deployment, in call order.
///
/// The runner is generic over this trait; tests drive it with a mock while
/// `RpcBackend` is the real thing.
pub trait DeployBackend {
    /// Resolve a deployable factory handle for a named contract.
    fn factory(&self, name: &str) -> impl Future<Output = DeployResult<ContractFactory>> + Send;

    /// Sign and broadcast the creation transaction. Called exactly once per
    /// run; implementations must not retry a failed broadcast.
    fn submit(
        &self,
        factory: &ContractFactory,
    ) -> impl Future<Output = DeployResult<PendingDeployment>> + Send;

    /// Suspend until the deployment is confirmed, yielding the finalized
    /// instance handle.
    fn confirm(
        &self,
        pending: &PendingDeployment,
    ) -> impl Future<Output = DeployResult<DeployedContract>> + Send;
}

/// Deployment backend over a JSON-RPC node.
#[derive(Debug)]
pub struct RpcBackend {
    store: ArtifactStore,
    client: DeployClient,
    wallet: Wallet,
    config: DeploymentConfig,
}

impl RpcBackend {
    pub fn new(
        store: ArtifactStore,
        client: DeployClient,
        wallet: Wallet,
        config: DeploymentConfig,
    ) -> Self {
        Self {
            store,
            client,
            wallet,
            config,
        }
    }

    /// Quote the gas price, enforce the configured ceiling, and apply the
    /// safety multiplier.
    async fn gas_price(&self) -> DeployResult<u128> {
        let quoted = self.client.get_gas_price().await?;
        let quoted_gwei = quoted / 1_000_000_000;

        if quoted_gwei > self.config.max_gas_price_gwei as u128 {
            return Err(ChainError::GasPriceTooHigh {
                current_gwei: quoted_gwei as u64,
                max_gwei: self.config.max_gas_price_gwei,
            }
            .into());
        }

        Ok((quoted as f64 * self.config.gas_price_multiplier) as u128)
    }
}

impl DeployBackend for RpcBackend {
    async fn factory(&self, name: &str) -> DeployResult<ContractFactory> {
        let artifact = self.store.resolve(name)?;
        Ok(ContractFactory::new(artifact, self.wallet.address()))
    }

    async fn submit(&self, factory: &ContractFactory) -> DeployResult<PendingDeployment> {
        let deployer = factory.deployer();

        let nonce = self.client.get_transaction_count(deployer).await?;
        let balance = self.client.get_balance(deployer).await?;
        tracing::info!(
            deployer = %deployer,
            nonce = nonce,
            balance_wei = %balance,
            "Preparing deployment transaction"
        );

        let gas_price = self.gas_price().await?;

        let tx = TransactionRequest::default()
            .with_deploy_code(factory.bytecode().clone())
            .with_nonce(nonce)
            .with_chain_id(self.wallet.chain_id())
            .with_gas_price(gas_price);

        let gas_limit = self.client.estimate_gas(tx.clone()).await?;
        let tx = tx.with_gas_limit(gas_limit);

        let envelope = tx
            .build(&self.wallet.network_wallet())
            .await
            .map_err(|e| ChainError::Wallet(format!("Failed to sign deployment: {}", e)))?;

        use alloy::eips::eip2718::Encodable2718;
        let tx_hash = self
            .client
            .send_raw_transaction(&envelope.encoded_2718())
            .await?;

        tracing::info!(
            contract = factory.contract_name(),
            tx_hash = %tx_hash,
            gas_limit = gas_limit,
            gas_price_wei = gas_price,
            "Deployment transaction broadcast"
        );

        Ok(PendingDeployment {
            contract_name: factory.contract_name().to_owned(),
            tx_hash,
            nonce,
        })
    }

    async fn confirm(&self, pending: &PendingDeployment) -> DeployResult<DeployedContract> {
        let required = self.config.confirmation_blocks;
        let wait = Duration::from_secs(self.config.confirmation_timeout_secs);
        let poll = Duration::from_secs(self.config.poll_interval_secs);
        let tx_hash = pending.tx_hash;

        let result = timeout(wait, async {
            let mut ticker = interval(poll);

            loop {
                ticker.tick().await;

                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Deployment pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Err(ChainError::Reverted(format!(
                        "creation transaction {} reverted",
                        tx_hash
                    ))
                    .into());
                }

                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = (current_block.saturating_sub(tx_block) + 1) as u32;

                if confirmations >= required {
                    let address = receipt
                        .contract_address
                        .ok_or(DeployError::MissingContractAddress { tx_hash })?;

                    return Ok(DeployedContract {
                        contract_name: pending.contract_name.clone(),
                        address,
                        tx_hash,
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(_) => Err(ChainError::ConfirmationTimeout {
                waited_secs: self.config.confirmation_timeout_secs,
            }
            .into()),
        }
    }
}
