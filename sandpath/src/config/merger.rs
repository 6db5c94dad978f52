//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, RootsConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use sandpath::config::{Config, ConfigMerger};
///
/// let low = Config { max_symlink_hops: Some(8), ..Default::default() };
/// let high = Config { max_symlink_hops: Some(16), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_symlink_hops, Some(16));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources are applied in ascending precedence order regardless of the
    /// order they are given in.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Roots: field-by-field merge
    /// - Localizations: complete replacement
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.container.is_some() {
            target.container.clone_from(&source.container);
        }

        if source.bundle.is_some() {
            target.bundle.clone_from(&source.bundle);
        }

        if let Some(ref roots) = source.roots {
            let merged = target.roots.get_or_insert_with(RootsConfig::default);
            Self::merge_roots(merged, roots);
        }

        if source.max_symlink_hops.is_some() {
            target.max_symlink_hops = source.max_symlink_hops;
        }

        if source.localizations.is_some() {
            target.localizations.clone_from(&source.localizations);
        }
    }

    fn merge_roots(target: &mut RootsConfig, source: &RootsConfig) {
        let pairs = [
            (&mut target.documents, &source.documents),
            (&mut target.library, &source.library),
            (&mut target.cache, &source.cache),
            (&mut target.tmp, &source.tmp),
            (&mut target.application_support, &source.application_support),
        ];
        for (slot, value) in pairs {
            if value.is_some() {
                slot.clone_from(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_higher_precedence_wins_regardless_of_order() {
        let high = source(
            2,
            Config {
                container: Some(PathBuf::from("/high")),
                ..Default::default()
            },
        );
        let low = source(
            1,
            Config {
                container: Some(PathBuf::from("/low")),
                bundle: Some(PathBuf::from("/low/App.app")),
                ..Default::default()
            },
        );

        let merged = ConfigMerger::merge(vec![high, low]);
        assert_eq!(merged.container, Some(PathBuf::from("/high")));
        assert_eq!(merged.bundle, Some(PathBuf::from("/low/App.app")));
    }

    #[test]
    fn test_roots_merge_field_by_field() {
        let mut target = Config {
            roots: Some(RootsConfig {
                documents: Some(PathBuf::from("/docs")),
                cache: Some(PathBuf::from("/old-cache")),
                ..Default::default()
            }),
            ..Default::default()
        };
        let overlay = Config {
            roots: Some(RootsConfig {
                cache: Some(PathBuf::from("/new-cache")),
                ..Default::default()
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &overlay);
        let roots = target.roots.unwrap();
        assert_eq!(roots.documents, Some(PathBuf::from("/docs")));
        assert_eq!(roots.cache, Some(PathBuf::from("/new-cache")));
    }

    #[test]
    fn test_localizations_replaced() {
        let mut target = Config {
            localizations: Some(vec!["Base".into(), "en".into()]),
            ..Default::default()
        };
        let overlay = Config {
            localizations: Some(vec!["fr".into()]),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &overlay);
        assert_eq!(target.localizations, Some(vec!["fr".to_string()]));
    }
}
