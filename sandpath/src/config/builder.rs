//! Layered configuration building.

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration from files, environment and
/// programmatic overrides.
///
/// # Examples
///
/// ```
/// use sandpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { max_symlink_hops: Some(4), ..Default::default() })
///     .build()
///     .unwrap();
/// assert_eq!(config.max_symlink_hops(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` instead of the user configuration file.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `SANDPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Layer `config` above files and environment. Later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Build and validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is malformed, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();
        if !self.skip_files {
            sources.extend(ConfigLoader::load(self.config_file.as_deref())?);
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overlay in &self.overrides {
            ConfigMerger::merge_into(&mut config, overlay);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::ENV_CONTAINER;
    use serial_test::serial;
    use std::env;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_file_then_env_then_override() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("sandpath.yaml");
        fs::write(
            &file,
            "container: /file/container\nbundle: /file/App.app\nmax_symlink_hops: 5\n",
        )
        .unwrap();

        env::set_var(ENV_CONTAINER, "/env/container");
        let config = ConfigBuilder::new()
            .with_config_file(&file)
            .with_config(Config {
                max_symlink_hops: Some(9),
                ..Default::default()
            })
            .build();
        env::remove_var(ENV_CONTAINER);

        let config = config.unwrap();
        assert_eq!(config.container, Some(PathBuf::from("/env/container")));
        assert_eq!(config.bundle, Some(PathBuf::from("/file/App.app")));
        assert_eq!(config.max_symlink_hops, Some(9));
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                container: Some(PathBuf::from("not/absolute")),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigBuilder::new()
            .skip_env()
            .with_config_file(temp_dir.path().join("nope.yaml"))
            .build();
        assert!(result.is_err());
    }
}
