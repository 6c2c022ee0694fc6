//! The deployment runner: four ordered steps, no branching.

use std::io::Write;

use crate::deploy::backend::DeployBackend;
use crate::deploy::types::{DeployResult, DeployedContract};

/// Deploy a named contract and write the report line to `out`.
///
/// Performs exactly one factory lookup, one submission, and one
/// confirmation wait. On success the only line written is
/// `"<name> deployed to: <address>"`. Any failure propagates unchanged;
/// nothing is written to `out` in that case.
pub async fn run_deployment<B, W>(
    backend: &B,
    contract_name: &str,
    out: &mut W,
) -> DeployResult<DeployedContract>
where
    B: DeployBackend,
    W: Write,
{
    tracing::info!(contract = contract_name, "Resolving contract factory");
    let factory = backend.factory(contract_name).await?;

    tracing::info!(
        contract = contract_name,
        bytecode_bytes = factory.bytecode().len(),
        "Submitting deployment"
    );
    let pending = backend.submit(&factory).await?;

    tracing::info!(tx_hash = %pending.tx_hash, "Awaiting confirmation");
    let deployed = backend.confirm(&pending).await?;

    tracing::info!(
        contract = %deployed.contract_name,
        address = %deployed.address,
        block_number = deployed.block_number,
        "Deployment confirmed"
    );
    writeln!(out, "{} deployed to: {}", deployed.contract_name, deployed.address)?;

    Ok(deployed)
}
