//! Blockchain collaborator boundary.
//!
//! # Data Flow
//! ```text
//! Environment Variables (private key)
//!     → wallet.rs (key loading, signing)
//!     → client.rs (RPC connection with timeouts, read failover)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables or explicit hex input
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts
//! - Transaction submission hits the primary endpoint only and is never
//!   retried: a second broadcast of a creation transaction is a second
//!   deployment, not a retry

pub mod client;
pub mod types;
pub mod wallet;

pub use client::DeployClient;
pub use types::{ChainError, ChainId, ChainResult};
pub use wallet::Wallet;
