//! Configuration schema definitions.
//!
//! This module defines the configuration structure for sandpath: where the
//! sandbox container and bundle live, per-root overrides, and resolver
//! policy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bundle::DEFAULT_LOCALIZATIONS;
use crate::path::symlink::DEFAULT_MAX_SYMLINK_HOPS;

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to built-in defaults.
///
/// # Examples
///
/// ```
/// use sandpath::config::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     container: Some(PathBuf::from("/var/mobile/Containers/Data/Application/APP")),
///     max_symlink_hops: Some(8),
///     ..Default::default()
/// };
/// assert_eq!(config.max_symlink_hops(), 8);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory the sandbox roots are laid out beneath.
    pub container: Option<PathBuf>,

    /// The main bundle directory.
    pub bundle: Option<PathBuf>,

    /// Per-directory root overrides.
    pub roots: Option<RootsConfig>,

    /// Maximum number of symbolic link hops followed before giving up.
    pub max_symlink_hops: Option<usize>,

    /// Localization directories (`<name>.lproj`) searched for bundle
    /// resources.
    pub localizations: Option<Vec<String>>,
}

impl Config {
    /// The effective symlink hop limit.
    #[must_use]
    pub fn max_symlink_hops(&self) -> usize {
        self.max_symlink_hops.unwrap_or(DEFAULT_MAX_SYMLINK_HOPS)
    }

    /// The effective localization search list.
    #[must_use]
    pub fn localizations(&self) -> Vec<String> {
        self.localizations.clone().unwrap_or_else(|| {
            DEFAULT_LOCALIZATIONS
                .iter()
                .map(|lang| (*lang).to_string())
                .collect()
        })
    }
}

/// Explicit roots that replace the container-derived defaults.
///
/// # Examples
///
/// ```
/// use sandpath::config::RootsConfig;
/// use std::path::PathBuf;
///
/// let roots = RootsConfig {
///     cache: Some(PathBuf::from("/fast-disk/cache")),
///     ..Default::default()
/// };
/// assert!(roots.documents.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RootsConfig {
    /// Documents root.
    pub documents: Option<PathBuf>,
    /// Library root.
    pub library: Option<PathBuf>,
    /// Cache root.
    pub cache: Option<PathBuf>,
    /// Temporary directory root.
    pub tmp: Option<PathBuf>,
    /// Application Support root.
    pub application_support: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_policy_defaults() {
        let config = Config::default();
        assert_eq!(config.max_symlink_hops(), 32);
        assert_eq!(config.localizations(), vec!["Base".to_string()]);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r"
container: /data/container
bundle: /opt/App.app
roots:
  cache: /fast/cache
  application_support: /data/support
max_symlink_hops: 12
localizations: [Base, en, fr]
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.container, Some(PathBuf::from("/data/container")));
        assert_eq!(config.bundle, Some(PathBuf::from("/opt/App.app")));
        let roots = config.roots.as_ref().unwrap();
        assert_eq!(roots.cache, Some(PathBuf::from("/fast/cache")));
        assert_eq!(roots.documents, None);
        assert_eq!(config.max_symlink_hops(), 12);
        assert_eq!(config.localizations().len(), 3);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("documents_dir: /x\n");
        assert!(result.is_err());

        let result: Result<Config, _> = serde_yaml::from_str("roots:\n  downloads: /x\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }
}
