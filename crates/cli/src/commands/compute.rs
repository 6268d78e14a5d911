//! APR command implementations.

use alloy_chains::Chain;
use alloy_primitives::Address;
use anyhow::{Context, Result};
use staking_apr::{
    AprCalculator, AprConfig, InMemoryMetadataStore, InMemoryPriceStore, InMemoryRegistry,
    RpcChainReader, StoreSnapshot, Vault,
};
use tracing::debug;

use crate::cli::{ComputeAllArgs, ComputeArgs, OutputFormat, SourceArgs};
use crate::output::{format_apr_detail, format_apr_table, AprReport};

/// Decimals assumed for a vault token absent from both the flags and the snapshot.
const DEFAULT_VAULT_DECIMALS: u8 = 18;

type SnapshotCalculator =
    AprCalculator<InMemoryRegistry, RpcChainReader, InMemoryMetadataStore, InMemoryPriceStore>;

/// Load the snapshot and build a calculator reading `chain` through `--rpc-url`.
fn build_calculator(source: &SourceArgs, chain: Chain) -> Result<(SnapshotCalculator, Vec<Vault>)> {
    let stores = StoreSnapshot::load(&source.snapshot)
        .and_then(|snapshot| snapshot.into_stores())
        .with_context(|| format!("Failed to load snapshot {}", source.snapshot.display()))?;

    let mut config =
        AprConfig::new().with_default_reward_decimals(source.default_reward_decimals);
    if let Some(url) = &source.rpc_url {
        let url = url
            .parse()
            .with_context(|| format!("Invalid RPC URL: {}", url))?;
        config = config.with_rpc_url(chain, url);
    }

    let reader = RpcChainReader::from_config(&config)?;
    debug!(%chain, rpc = reader.supports(chain), "built calculator");

    let calculator = AprCalculator::new(stores.registry, reader, stores.metadata, stores.prices)
        .with_config(config);
    Ok((calculator, stores.vaults))
}

pub async fn run_compute(args: &ComputeArgs, format: OutputFormat) -> Result<()> {
    let address: Address = args
        .vault
        .parse()
        .with_context(|| format!("Invalid vault address: {}", args.vault))?;
    let chain = args.chain.0;

    let (calculator, vaults) = build_calculator(&args.source, chain)?;

    let decimals = args
        .decimals
        .or_else(|| {
            vaults
                .iter()
                .find(|v| v.chain == chain && v.address == address)
                .map(|v| v.decimals)
        })
        .unwrap_or(DEFAULT_VAULT_DECIMALS);
    let vault = Vault::new(chain, address, decimals);

    let outcome = calculator.compute(&vault).await?;
    let report = AprReport::from_outcome(&vault, &outcome);

    match format {
        OutputFormat::Table => {
            println!("{}", format_apr_detail(&report));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
    }

    Ok(())
}

pub async fn run_compute_all(args: &ComputeAllArgs, format: OutputFormat) -> Result<()> {
    let chain = args.chain.0;
    let (calculator, vaults) = build_calculator(&args.source, chain)?;

    let vaults: Vec<Vault> = vaults.into_iter().filter(|v| v.chain == chain).collect();

    let reports: Vec<AprReport> = calculator
        .compute_many(&vaults)
        .await
        .iter()
        .zip(&vaults)
        .map(|(result, vault)| match result {
            Ok(outcome) => AprReport::from_outcome(vault, outcome),
            Err(error) => AprReport::failed(vault, error),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            println!("{}", format_apr_table(&reports));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports)?;
            println!("{}", json);
        }
    }

    Ok(())
}
