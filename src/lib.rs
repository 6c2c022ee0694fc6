//! Contract Deployment Runner
//!
//! A one-shot tool that deploys a compiled smart contract to an EVM chain
//! and reports the resulting address.
//!
//! # Data Flow
//! ```text
//! artifacts/<Name>.json ──▶ artifact (resolve factory by name)
//!                               │
//! DEPLOYER_PRIVATE_KEY  ──▶ blockchain::wallet (key loading, signing)
//! config file / CLI     ──▶ blockchain::client (RPC with timeouts)
//!                               │
//!                               ▼
//!                           deploy::backend (build, sign, broadcast)
//!                               │
//!                               ▼
//!                           deploy::runner (resolve → submit → confirm
//!                                           → "<name> deployed to: <addr>")
//! ```

pub mod artifact;
pub mod blockchain;
pub mod config;
pub mod deploy;
pub mod observability;

pub use artifact::ArtifactStore;
pub use blockchain::{DeployClient, Wallet};
pub use config::DeployerConfig;
pub use deploy::{run_deployment, DeployBackend, DeployError, RpcBackend};
