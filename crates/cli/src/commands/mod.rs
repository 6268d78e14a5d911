//! Command implementations.

pub mod compute;

pub use compute::{run_compute, run_compute_all};
