//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! deployment runner. All types derive Serde traits for deserialization
//! from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the deployment runner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DeployerConfig {
    /// JSON-RPC endpoint settings.
    pub rpc: RpcConfig,

    /// Deployment transaction settings.
    pub deployment: DeploymentConfig,

    /// Compiled artifact location.
    pub artifacts: ArtifactConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// JSON-RPC endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RpcConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Failover JSON-RPC endpoint URLs (read calls only).
    pub failover_urls: Vec<String>,

    /// Chain ID (e.g., 1 for Ethereum mainnet, 31337 for local Anvil).
    pub chain_id: u64,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            failover_urls: Vec::new(),
            chain_id: 31337,
            rpc_timeout_secs: 10,
        }
    }
}

/// Deployment transaction configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Number of block confirmations required before the deployment is
    /// reported as final.
    pub confirmation_blocks: u32,

    /// Maximum time to wait for confirmation in seconds.
    pub confirmation_timeout_secs: u64,

    /// Receipt poll interval in seconds.
    pub poll_interval_secs: u64,

    /// Multiplier applied to the quoted gas price as a safety margin.
    pub gas_price_multiplier: f64,

    /// Abort if the quoted gas price exceeds this many gwei.
    pub max_gas_price_gwei: u64,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            confirmation_blocks: 1,
            confirmation_timeout_secs: 120,
            poll_interval_secs: 2,
            gas_price_multiplier: 1.2,
            max_gas_price_gwei: 500,
        }
    }
}

/// Compiled artifact location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Directory holding `<ContractName>.json` artifact files.
    pub dir: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("artifacts"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_local_anvil() {
        let config = DeployerConfig::default();
        assert_eq!(config.rpc.rpc_url, "http://localhost:8545");
        assert_eq!(config.rpc.chain_id, 31337);
        assert_eq!(config.deployment.confirmation_blocks, 1);
        assert_eq!(config.artifacts.dir, PathBuf::from("artifacts"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let raw = r#"
            [rpc]
            rpc_url = "https://mainnet.example/rpc"
            chain_id = 1

            [deployment]
            confirmation_blocks = 3
        "#;
        let config: DeployerConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.rpc.rpc_url, "https://mainnet.example/rpc");
        assert_eq!(config.rpc.chain_id, 1);
        assert_eq!(config.rpc.rpc_timeout_secs, 10);
        assert_eq!(config.deployment.confirmation_blocks, 3);
        assert_eq!(config.deployment.poll_interval_secs, 2);
        assert_eq!(config.observability.log_level, "info");
    }
}
