//! Compiled contract artifacts.
//!
//! # Data Flow
//! ```text
//! artifacts directory (one JSON file per compiled contract)
//!     → store.rs (resolve by contract name)
//!     → ContractArtifact (name, ABI, creation bytecode)
//! ```
//!
//! # Design Decisions
//! - Artifacts use the Hardhat/solc JSON layout (`contractName`, `abi`,
//!   `bytecode`) so existing build output can be deployed as-is
//! - Resolution is by bare contract name; the store owns the directory lookup
//! - An artifact with empty bytecode (abstract contract or interface) is
//!   rejected at resolution time, before any RPC call is made

pub mod store;
pub mod types;

pub use store::ArtifactStore;
pub use types::{ArtifactError, ContractArtifact};
