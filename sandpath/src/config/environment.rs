//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SANDPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, RootsConfig};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides the container directory.
pub const ENV_CONTAINER: &str = "SANDPATH_CONTAINER";
/// Overrides the main bundle directory.
pub const ENV_BUNDLE_DIR: &str = "SANDPATH_BUNDLE_DIR";
/// Overrides the Documents root.
pub const ENV_DOCUMENTS_DIR: &str = "SANDPATH_DOCUMENTS_DIR";
/// Overrides the Library root.
pub const ENV_LIBRARY_DIR: &str = "SANDPATH_LIBRARY_DIR";
/// Overrides the Cache root.
pub const ENV_CACHE_DIR: &str = "SANDPATH_CACHE_DIR";
/// Overrides the Tmp root.
pub const ENV_TMP_DIR: &str = "SANDPATH_TMP_DIR";
/// Overrides the Application Support root.
pub const ENV_APPLICATION_SUPPORT_DIR: &str = "SANDPATH_APPLICATION_SUPPORT_DIR";
/// Overrides the symlink hop limit.
pub const ENV_MAX_SYMLINK_HOPS: &str = "SANDPATH_MAX_SYMLINK_HOPS";
/// Comma-separated localization list.
pub const ENV_LOCALIZATIONS: &str = "SANDPATH_LOCALIZATIONS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use sandpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(container) = Self::path_var(ENV_CONTAINER) {
            config.container = Some(container);
        }

        if let Some(bundle) = Self::path_var(ENV_BUNDLE_DIR) {
            config.bundle = Some(bundle);
        }

        Self::apply_root_overrides(config);

        if let Some(hops) = Self::non_empty_var(ENV_MAX_SYMLINK_HOPS) {
            config.max_symlink_hops = Some(hops.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_SYMLINK_HOPS.into(),
                message: format!("Must be a positive integer, got '{hops}'"),
            })?);
        }

        if let Some(langs) = Self::non_empty_var(ENV_LOCALIZATIONS) {
            config.localizations = Some(
                langs
                    .split(',')
                    .map(str::trim)
                    .filter(|lang| !lang.is_empty())
                    .map(String::from)
                    .collect(),
            );
        }

        Ok(())
    }

    fn apply_root_overrides(config: &mut Config) {
        let vars = [
            ENV_DOCUMENTS_DIR,
            ENV_LIBRARY_DIR,
            ENV_CACHE_DIR,
            ENV_TMP_DIR,
            ENV_APPLICATION_SUPPORT_DIR,
        ];
        if vars.iter().all(|var| Self::path_var(var).is_none()) {
            return;
        }

        let roots = config.roots.get_or_insert_with(RootsConfig::default);
        if let Some(path) = Self::path_var(ENV_DOCUMENTS_DIR) {
            roots.documents = Some(path);
        }
        if let Some(path) = Self::path_var(ENV_LIBRARY_DIR) {
            roots.library = Some(path);
        }
        if let Some(path) = Self::path_var(ENV_CACHE_DIR) {
            roots.cache = Some(path);
        }
        if let Some(path) = Self::path_var(ENV_TMP_DIR) {
            roots.tmp = Some(path);
        }
        if let Some(path) = Self::path_var(ENV_APPLICATION_SUPPORT_DIR) {
            roots.application_support = Some(path);
        }
    }

    fn non_empty_var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    fn path_var(name: &str) -> Option<PathBuf> {
        Self::non_empty_var(name).map(PathBuf::from)
    }
}
