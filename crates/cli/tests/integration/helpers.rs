//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;

/// Vault with a staking campaign in the snapshot fixture.
pub const STAKED_VAULT: &str = "0x1111111111111111111111111111111111111111";

/// Vault without a staking campaign in the snapshot fixture.
pub const UNSTAKED_VAULT: &str = "0x3333333333333333333333333333333333333333";

/// Create a CLI command isolated from the caller's environment.
pub fn apr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("staking-apr").unwrap();
    cmd.env_remove("ETH_RPC_URL")
        .env_remove("STAKING_APR_SNAPSHOT")
        .env_remove("RUST_LOG");
    cmd
}

/// Path of a fixture file.
pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name)
}

/// Path of the default snapshot fixture.
pub fn snapshot_path() -> String {
    fixture_path("snapshot")
}
