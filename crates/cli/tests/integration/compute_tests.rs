//! Compute command tests against the snapshot fixture.

use predicates::prelude::*;

use super::helpers::{apr_cmd, snapshot_path, STAKED_VAULT, UNSTAKED_VAULT};

#[test]
fn test_compute_no_campaign_json() {
    let output = apr_cmd()
        .args([
            "--format",
            "json",
            "compute",
            UNSTAKED_VAULT,
            "--chain",
            "optimism",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["chain"], 10);
    assert_eq!(report["valid"], false);
    assert_eq!(report["apr"], "0");
    assert_eq!(report["status"], "no staking campaign");
    assert!(report.get("reward_rate").is_none());
}

#[test]
fn test_compute_no_campaign_table() {
    apr_cmd()
        .args([
            "compute",
            UNSTAKED_VAULT,
            "--chain",
            "10",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staking APR"))
        .stdout(predicate::str::contains("no staking campaign"));
}

#[test]
fn test_compute_snapshot_from_env() {
    apr_cmd()
        .env("STAKING_APR_SNAPSHOT", snapshot_path())
        .args(["compute", UNSTAKED_VAULT, "--chain", "op"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no staking campaign"));
}

#[test]
fn test_compute_unregistered_chain_has_no_campaign() {
    // Campaigns are keyed by chain; the fixture vault only has one on Optimism.
    apr_cmd()
        .args([
            "--format",
            "json",
            "compute",
            STAKED_VAULT,
            "--chain",
            "base",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("no staking campaign"));
}

#[test]
fn test_compute_campaign_without_rpc_fails() {
    apr_cmd()
        .args([
            "compute",
            STAKED_VAULT,
            "--chain",
            "optimism",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No RPC endpoint configured"));
}

#[test]
fn test_compute_all_reports_each_vault() {
    let output = apr_cmd()
        .args([
            "--format",
            "json",
            "compute-all",
            "--chain",
            "optimism",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let reports: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);

    assert_eq!(
        reports[0]["vault"].as_str().unwrap().to_lowercase(),
        STAKED_VAULT
    );
    assert_eq!(reports[0]["valid"], false);
    assert!(reports[0]["status"]
        .as_str()
        .unwrap()
        .contains("No RPC endpoint configured"));

    assert_eq!(reports[1]["status"], "no staking campaign");
}

#[test]
fn test_compute_all_table() {
    apr_cmd()
        .args([
            "compute-all",
            "--chain",
            "optimism",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x3333...3333"))
        .stdout(predicate::str::contains("no staking campaign"))
        .stdout(predicate::str::contains("No RPC endpoint configured"));
}

#[test]
fn test_compute_all_no_vaults_on_chain() {
    apr_cmd()
        .args([
            "compute-all",
            "--chain",
            "base",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No vaults found."));
}
