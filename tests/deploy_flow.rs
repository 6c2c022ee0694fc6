//! End-to-end tests for the deployment flow.
//!
//! The chain collaborator is driven through the `DeployBackend` seam: a
//! scripted backend stands in for the JSON-RPC node, which lets these tests
//! assert the operator-visible contract (report line, error propagation,
//! exactly-one submission) without a running node. The factory stage is also
//! exercised through the real `RpcBackend` against an artifacts directory
//! on disk.

use std::future::Future;
use std::sync::atomic::{AtomicU32, Ordering};

use alloy::primitives::{Address, TxHash};

use contract_deployer::artifact::{ArtifactError, ArtifactStore, ContractArtifact};
use contract_deployer::blockchain::{ChainError, DeployClient, Wallet};
use contract_deployer::config::{DeploymentConfig, RpcConfig};
use contract_deployer::deploy::{
    run_deployment, ContractFactory, DeployBackend, DeployError, DeployResult, DeployedContract,
    PendingDeployment, RpcBackend,
};

// Anvil's first account; well-known test key, holds nothing anywhere real.
const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

const ARTIFACT_JSON: &str = r#"{
    "contractName": "MetaTransactionNetwork",
    "abi": [{"type": "function", "name": "executeMetaTransaction", "inputs": []}],
    "bytecode": "0x608060405234801561001057600080fd5b50"
}"#;

/// Scripted collaborator: succeeds at every stage unless told otherwise,
/// and counts every call.
#[derive(Default)]
struct ScriptedBackend {
    fail_factory: bool,
    fail_confirm_with_timeout: bool,
    factory_calls: AtomicU32,
    submit_calls: AtomicU32,
    confirm_calls: AtomicU32,
}

impl DeployBackend for ScriptedBackend {
    fn factory(&self, name: &str) -> impl Future<Output = DeployResult<ContractFactory>> + Send {
        self.factory_calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail_factory {
            Err(ArtifactError::NotFound {
                name: name.into(),
                search_dir: "artifacts".into(),
            }
            .into())
        } else {
            let artifact: ContractArtifact = serde_json::from_str(ARTIFACT_JSON).unwrap();
            Ok(ContractFactory::new(artifact, Address::repeat_byte(0x11)))
        };
        async move { result }
    }

    fn submit(
        &self,
        factory: &ContractFactory,
    ) -> impl Future<Output = DeployResult<PendingDeployment>> + Send {
        self.submit_calls.fetch_add(1, Ordering::SeqCst);
        let pending = PendingDeployment {
            contract_name: factory.contract_name().to_owned(),
            tx_hash: TxHash::repeat_byte(0x5a),
            nonce: 3,
        };
        async move { Ok(pending) }
    }

    fn confirm(
        &self,
        pending: &PendingDeployment,
    ) -> impl Future<Output = DeployResult<DeployedContract>> + Send {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail_confirm_with_timeout {
            Err(ChainError::ConfirmationTimeout { waited_secs: 120 }.into())
        } else {
            Ok(DeployedContract {
                contract_name: pending.contract_name.clone(),
                address: "0xabc1230000000000000000000000000000000000"
                    .parse()
                    .unwrap(),
                tx_hash: pending.tx_hash,
                block_number: 42,
            })
        };
        async move { result }
    }
}

#[tokio::test]
async fn successful_deployment_reports_address() {
    let backend = ScriptedBackend::default();
    let mut out = Vec::new();

    let deployed = run_deployment(&backend, "MetaTransactionNetwork", &mut out)
        .await
        .expect("deployment should succeed");

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("MetaTransactionNetwork deployed to: "));

    let address = text
        .trim_end()
        .strip_prefix("MetaTransactionNetwork deployed to: ")
        .unwrap();
    assert!(!address.is_empty());
    assert_eq!(address, deployed.address.to_string());

    // One line only, and one call per stage
    assert_eq!(text.lines().count(), 1);
    assert_eq!(backend.factory_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.confirm_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn factory_lookup_failure_writes_no_report() {
    let backend = ScriptedBackend {
        fail_factory: true,
        ..Default::default()
    };
    let mut out = Vec::new();

    let err = run_deployment(&backend, "MetaTransactionNetwork", &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, DeployError::Artifact(_)));
    assert!(out.is_empty(), "no success line may be written on failure");
    // Factory lookup failed, so nothing was ever submitted
    assert_eq!(backend.factory_calls.load(Ordering::SeqCst), 1);
    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn confirmation_timeout_writes_no_report() {
    let backend = ScriptedBackend {
        fail_confirm_with_timeout: true,
        ..Default::default()
    };
    let mut out = Vec::new();

    let err = run_deployment(&backend, "MetaTransactionNetwork", &mut out)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DeployError::Chain(ChainError::ConfirmationTimeout { .. })
    ));
    assert!(out.is_empty());
    // The submission still happened exactly once
    assert_eq!(backend.submit_calls.load(Ordering::SeqCst), 1);
}

fn rpc_backend_with_artifacts(dir: &std::path::Path) -> RpcBackend {
    let client = DeployClient::new(RpcConfig::default()).unwrap();
    let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, 31337).unwrap();
    RpcBackend::new(
        ArtifactStore::new(dir),
        client,
        wallet,
        DeploymentConfig::default(),
    )
}

#[tokio::test]
async fn rpc_backend_resolves_factory_from_disk() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("MetaTransactionNetwork.json"), ARTIFACT_JSON).unwrap();

    let backend = rpc_backend_with_artifacts(tmp.path());
    let factory = backend.factory("MetaTransactionNetwork").await.unwrap();

    assert_eq!(factory.contract_name(), "MetaTransactionNetwork");
    assert!(!factory.bytecode().is_empty());
    assert_eq!(
        factory.deployer().to_string().to_lowercase(),
        "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
    );
}

#[tokio::test]
async fn rpc_backend_reports_missing_artifact() {
    let tmp = tempfile::tempdir().unwrap();

    let backend = rpc_backend_with_artifacts(tmp.path());
    let err = backend.factory("MetaTransactionNetwork").await.unwrap_err();

    assert!(matches!(
        err,
        DeployError::Artifact(ArtifactError::NotFound { .. })
    ));
    assert!(err.to_string().contains("MetaTransactionNetwork.json"));
}
