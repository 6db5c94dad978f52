//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and resolver construction.

use crate::error::CliError;
use sandpath::path::normalize::join_normalized;
use sandpath::{Config, ConfigBuilder, PathResolver};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Override the container directory.
    pub container: Option<PathBuf>,

    /// Override the main bundle directory.
    pub bundle_dir: Option<PathBuf>,
}

/// Make a user-supplied directory absolute against the working directory.
pub fn absolutize(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = env::current_dir()?;
    Ok(PathBuf::from(join_normalized(&cwd, &path.to_string_lossy())))
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        builder = builder.with_config_file(file);
    }

    let overrides = Config {
        container: global.container.as_deref().map(absolutize).transpose()?,
        bundle: global.bundle_dir.as_deref().map(absolutize).transpose()?,
        ..Default::default()
    };

    let config = builder.with_config(overrides).build()?;
    log::debug!("effective configuration: {config:?}");
    Ok(config)
}

/// Build a resolver for the real filesystem from the global options.
pub fn build_resolver(global: &GlobalOptions) -> Result<PathResolver, CliError> {
    let config = load_configuration(global)?;
    Ok(PathResolver::from_config(&config)?)
}

/// Print `output` followed by a newline unless it is empty.
pub fn print_output(output: &str) {
    if !output.is_empty() {
        println!("{output}");
    }
}
