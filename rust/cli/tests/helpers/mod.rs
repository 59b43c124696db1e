//! Shared helpers for integration tests that drive the `ante` binary.
pub mod cli_runner;
