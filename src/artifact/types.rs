//! Artifact data types and error definitions.

use alloy::primitives::Bytes;
use serde::Deserialize;
use thiserror::Error;

/// A compiled contract artifact in the Hardhat/solc JSON layout.
///
/// Only the fields needed for deployment are deserialized; the rest of the
/// artifact (source maps, link references, metadata) is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name as emitted by the compiler.
    pub contract_name: String,

    /// Contract ABI, kept opaque (no constructor arguments are encoded).
    pub abi: serde_json::Value,

    /// Creation bytecode as a 0x-prefixed hex string.
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Whether the artifact can actually be put on chain.
    ///
    /// Abstract contracts and interfaces compile to empty bytecode (`"0x"`).
    pub fn is_deployable(&self) -> bool {
        !self.bytecode.is_empty()
    }
}

/// Errors that can occur while resolving a contract artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// No artifact file exists for the requested contract.
    #[error("contract artifact not found: no {name}.json in {search_dir}")]
    NotFound { name: String, search_dir: String },

    /// The artifact file exists but could not be read.
    #[error("failed to read artifact for {name}: {source}")]
    Unreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file is not valid artifact JSON.
    #[error("malformed artifact for {name}: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The artifact has empty bytecode (abstract contract or interface).
    #[error("contract {name} has no creation bytecode and cannot be deployed")]
    NotDeployable { name: String },

    /// The contract name is not a plain file stem.
    #[error("invalid contract name: {name}")]
    InvalidName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "contractName": "MetaTransactionNetwork",
        "abi": [{"type": "function", "name": "execute", "inputs": []}],
        "bytecode": "0x6080604052"
    }"#;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact: ContractArtifact = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(artifact.contract_name, "MetaTransactionNetwork");
        assert_eq!(artifact.bytecode.len(), 5);
        assert!(artifact.is_deployable());
    }

    #[test]
    fn empty_bytecode_is_not_deployable() {
        let raw = r#"{"contractName": "IExecutor", "abi": [], "bytecode": "0x"}"#;
        let artifact: ContractArtifact = serde_json::from_str(raw).unwrap();
        assert!(!artifact.is_deployable());
    }

    #[test]
    fn rejects_non_hex_bytecode() {
        let raw = r#"{"contractName": "Bad", "abi": [], "bytecode": "not-hex"}"#;
        assert!(serde_json::from_str::<ContractArtifact>(raw).is_err());
    }

    #[test]
    fn error_display_names_the_contract() {
        let err = ArtifactError::NotFound {
            name: "MetaTransactionNetwork".into(),
            search_dir: "artifacts".into(),
        };
        assert!(err.to_string().contains("MetaTransactionNetwork.json"));
    }
}
