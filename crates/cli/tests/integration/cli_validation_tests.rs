//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages without requiring network access.

use predicates::prelude::*;

use super::helpers::{apr_cmd, fixture_path, snapshot_path, UNSTAKED_VAULT};

#[test]
fn test_help_output() {
    apr_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("staking-apr"))
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("compute-all"));
}

#[test]
fn test_compute_help_output() {
    apr_cmd()
        .args(["compute", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--snapshot"))
        .stdout(predicate::str::contains("--rpc-url"))
        .stdout(predicate::str::contains("--decimals"));
}

#[test]
fn test_invalid_command() {
    apr_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_compute_missing_address() {
    apr_cmd()
        .args(["compute", "--snapshot", &snapshot_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_compute_missing_snapshot() {
    apr_cmd()
        .args(["compute", UNSTAKED_VAULT])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--snapshot"));
}

#[test]
fn test_compute_invalid_address() {
    apr_cmd()
        .args(["compute", "not-an-address", "--snapshot", &snapshot_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vault address"));
}

#[test]
fn test_compute_unknown_chain() {
    apr_cmd()
        .args([
            "compute",
            UNSTAKED_VAULT,
            "--chain",
            "notachain",
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown chain"));
}

#[test]
fn test_invalid_format() {
    apr_cmd()
        .args([
            "--format",
            "xml",
            "compute",
            UNSTAKED_VAULT,
            "--snapshot",
            &snapshot_path(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_snapshot_file_not_found() {
    apr_cmd()
        .args([
            "compute",
            UNSTAKED_VAULT,
            "--snapshot",
            &fixture_path("does_not_exist"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load snapshot"));
}

#[test]
fn test_invalid_rpc_url() {
    apr_cmd()
        .args([
            "compute",
            UNSTAKED_VAULT,
            "--chain",
            "optimism",
            "--snapshot",
            &snapshot_path(),
            "--rpc-url",
            "not a url",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid RPC URL"));
}
