//! Deployment handles and the top-level error taxonomy.

use alloy::primitives::{Address, TxHash};
use thiserror::Error;

use crate::artifact::{ArtifactError, ContractArtifact};
use crate::blockchain::ChainError;

/// Factory handle for a named contract: the resolved artifact plus the
/// address that will sign and fund the deployment. Obtained once per run,
/// used once.
#[derive(Debug, Clone)]
pub struct ContractFactory {
    artifact: ContractArtifact,
    deployer: Address,
}

impl ContractFactory {
    pub fn new(artifact: ContractArtifact, deployer: Address) -> Self {
        Self { artifact, deployer }
    }

    pub fn contract_name(&self) -> &str {
        &self.artifact.contract_name
    }

    pub fn bytecode(&self) -> &alloy::primitives::Bytes {
        &self.artifact.bytecode
    }

    pub fn deployer(&self) -> Address {
        self.deployer
    }
}

/// A deployment transaction that has been broadcast but not yet confirmed.
#[derive(Debug, Clone)]
pub struct PendingDeployment {
    /// Contract being deployed.
    pub contract_name: String,
    /// Hash of the broadcast creation transaction.
    pub tx_hash: TxHash,
    /// Nonce the transaction was signed with.
    pub nonce: u64,
}

/// A confirmed, usable contract instance.
#[derive(Debug, Clone)]
pub struct DeployedContract {
    /// Contract name, for the operator-facing report line.
    pub contract_name: String,
    /// On-chain address of the new instance.
    pub address: Address,
    /// Creation transaction hash.
    pub tx_hash: TxHash,
    /// Block the creation transaction landed in.
    pub block_number: u64,
}

/// Any failure surfaced during factory resolution, submission, or the
/// confirmation wait. There is no local recovery; the error propagates to
/// the top level where it is printed once and turned into exit code 1.
#[derive(Debug, Error)]
pub enum DeployError {
    /// Artifact lookup or parsing failed.
    #[error("factory resolution failed: {0}")]
    Artifact(#[from] ArtifactError),

    /// The chain collaborator failed (RPC, signing, gas, confirmation).
    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    /// The confirmed receipt carried no contract address.
    #[error("transaction {tx_hash} confirmed but reported no contract address")]
    MissingContractAddress { tx_hash: TxHash },

    /// Writing the success report failed.
    #[error("failed to write deployment report: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type for deployment operations.
pub type DeployResult<T> = Result<T, DeployError>;
