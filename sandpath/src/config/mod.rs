//! Configuration system for sandpath.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (explicit, or `~/.sandpath/config.yaml`)
//! - `SANDPATH_*` environment variable overrides
//! - Programmatic overrides via the builder
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SANDPATH_*`)
//! 3. The configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use sandpath::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     container: Some(PathBuf::from("/srv/app-container")),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.container, Some(PathBuf::from("/srv/app-container")));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, RootsConfig};
pub use validator::ConfigValidator;
