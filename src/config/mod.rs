//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → DeployerConfig (validated, immutable)
//!
//! CLI flags override file values; validation runs again after overrides.
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; this is a one-shot tool, no reload
//! - All fields have defaults to allow running with no config file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ArtifactConfig, DeployerConfig, DeploymentConfig, RpcConfig};
pub use validation::validate_config;
