//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::str::FromStr;

use alloy_chains::{Chain, NamedChain};
use clap::{Args, Parser, Subcommand, ValueEnum};
use staking_apr::DEFAULT_REWARD_DECIMALS;

/// Staking APR CLI - Compute staking reward APRs of vaults
#[derive(Parser, Debug)]
#[command(name = "staking-apr")]
#[command(about = "CLI tool for computing staking reward APRs of vaults", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "table")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the staking APR of a single vault
    Compute(ComputeArgs),
    /// Compute the staking APR of every vault in the snapshot
    #[command(name = "compute-all")]
    ComputeAll(ComputeAllArgs),
}

#[derive(Parser, Debug)]
pub struct ComputeArgs {
    /// Vault token address
    pub vault: String,

    /// Chain the vault is on (default: ethereum)
    #[arg(long, default_value = "ethereum")]
    pub chain: ChainArg,

    /// Decimals of the vault token (default: from the snapshot, then 18)
    #[arg(long)]
    pub decimals: Option<u8>,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser, Debug)]
pub struct ComputeAllArgs {
    /// Chain to compute (default: ethereum)
    #[arg(long, default_value = "ethereum")]
    pub chain: ChainArg,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where registry, metadata and prices come from.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Path to a JSON snapshot of campaigns, token metadata and prices
    #[arg(long, env = "STAKING_APR_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// RPC endpoint for on-chain reads
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Decimals assumed for reward tokens that cannot be resolved
    #[arg(long, default_value_t = DEFAULT_REWARD_DECIMALS)]
    pub default_reward_decimals: u8,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Wrapper for Chain that implements FromStr with aliases
#[derive(Clone, Copy, Debug)]
pub struct ChainArg(pub Chain);

impl FromStr for ChainArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = match s.to_lowercase().as_str() {
            "ethereum" | "eth" | "mainnet" | "1" => NamedChain::Mainnet,
            "optimism" | "op" | "10" => NamedChain::Optimism,
            "base" | "8453" => NamedChain::Base,
            "arbitrum" | "arb" | "42161" => NamedChain::Arbitrum,
            "polygon" | "matic" | "137" => NamedChain::Polygon,
            "gnosis" | "xdai" | "100" => NamedChain::Gnosis,
            "fantom" | "ftm" | "250" => NamedChain::Fantom,
            "sepolia" | "11155111" => NamedChain::Sepolia,
            // Any other chain by id
            other => {
                return other
                    .parse::<u64>()
                    .map(|id| ChainArg(Chain::from_id(id)))
                    .map_err(|_| format!("Unknown chain: {}", s));
            }
        };
        Ok(ChainArg(Chain::from_named(named)))
    }
}

impl std::fmt::Display for ChainArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_aliases() {
        let eth: ChainArg = "eth".parse().unwrap();
        assert_eq!(eth.0.id(), 1);

        let op: ChainArg = "Optimism".parse().unwrap();
        assert_eq!(op.0.id(), 10);

        let arb: ChainArg = "42161".parse().unwrap();
        assert_eq!(arb.0.id(), 42161);
    }

    #[test]
    fn test_chain_by_numeric_id() {
        let chain: ChainArg = "59144".parse().unwrap();
        assert_eq!(chain.0.id(), 59144);
    }

    #[test]
    fn test_unknown_chain() {
        let err = "notachain".parse::<ChainArg>().unwrap_err();
        assert_eq!(err, "Unknown chain: notachain");
    }

    #[test]
    fn test_cli_parses_compute() {
        let cli = Cli::try_parse_from([
            "staking-apr",
            "--format",
            "json",
            "compute",
            "0x1111111111111111111111111111111111111111",
            "--chain",
            "op",
            "--snapshot",
            "snapshot.json",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        match cli.command {
            Commands::Compute(args) => {
                assert_eq!(args.chain.0.id(), 10);
                assert_eq!(args.decimals, None);
                assert_eq!(args.source.default_reward_decimals, 18);
            }
            Commands::ComputeAll(_) => panic!("expected compute"),
        }
    }
}
