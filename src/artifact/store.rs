//! Artifact resolution from the build output directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::types::{ArtifactError, ContractArtifact};

/// Resolves compiled contract artifacts by name from a directory.
///
/// The store expects one `<ContractName>.json` file per contract, in the
/// Hardhat/solc artifact layout.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given artifacts directory.
    ///
    /// The directory is not checked for existence here; a missing directory
    /// surfaces as `NotFound` when a contract is resolved.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store resolves from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the artifact for a named contract.
    ///
    /// # Errors
    /// - `InvalidName` if the name is empty or contains path components
    /// - `NotFound` if no `<name>.json` exists under the store directory
    /// - `Unreadable` / `Malformed` for IO and JSON failures
    /// - `NotDeployable` if the artifact has empty creation bytecode
    pub fn resolve(&self, name: &str) -> Result<ContractArtifact, ArtifactError> {
        // Contract names are bare file stems; anything that would escape the
        // artifacts directory is rejected up front.
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(ArtifactError::InvalidName { name: name.into() });
        }

        let path = self.dir.join(format!("{name}.json"));
        if !path.is_file() {
            return Err(ArtifactError::NotFound {
                name: name.into(),
                search_dir: self.dir.display().to_string(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|source| ArtifactError::Unreadable {
            name: name.into(),
            source,
        })?;

        let artifact: ContractArtifact =
            serde_json::from_str(&raw).map_err(|source| ArtifactError::Malformed {
                name: name.into(),
                source,
            })?;

        if !artifact.is_deployable() {
            return Err(ArtifactError::NotDeployable { name: name.into() });
        }

        tracing::debug!(
            contract = name,
            path = %path.display(),
            bytecode_bytes = artifact.bytecode.len(),
            "Resolved contract artifact"
        );

        Ok(artifact)
    }
}
