//! Deployment runner subsystem.
//!
//! # Data Flow
//! ```text
//! runner.rs (four ordered steps, no branching)
//!     → backend.rs  DeployBackend::factory   (artifact lookup)
//!     → backend.rs  DeployBackend::submit    (sign + broadcast, exactly once)
//!     → backend.rs  DeployBackend::confirm   (receipt polling)
//!     → stdout      "<name> deployed to: <address>"
//! ```
//!
//! # Design Decisions
//! - The runner is generic over `DeployBackend` so the three collaborator
//!   operations can be exercised without a live node
//! - No retries anywhere: a deployment transaction is not idempotent

pub mod backend;
pub mod runner;
pub mod types;

pub use backend::{DeployBackend, RpcBackend};
pub use runner::run_deployment;
pub use types::{ContractFactory, DeployError, DeployResult, DeployedContract, PendingDeployment};
