//! Library exports for sandpath-cli.
//!
//! This module exports the CLI structure for use by integration tests and
//! benchmarks.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
