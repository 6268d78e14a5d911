//! Integration tests for the staking APR CLI.
//!
//! These tests run the binary against a snapshot fixture. No RPC endpoint is
//! configured, so only paths that never reach the chain produce an APR;
//! vaults with a campaign report the missing endpoint instead.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p staking-apr-cli --test integration
//! ```

mod integration {
    pub mod helpers;
    pub mod cli_validation_tests;
    pub mod compute_tests;
}
