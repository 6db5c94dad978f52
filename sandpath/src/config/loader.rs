//! Configuration file discovery and loading.
//!
//! sandpath reads at most one configuration file: the one named explicitly
//! (for example with `--config`), or else the user configuration at
//! `~/.sandpath/config.yaml` when it exists.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user data directory under the home directory.
pub const USER_DIR_NAME: &str = ".sandpath";

/// Name of the configuration file inside the user data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A parsed configuration file and where it came from.
///
/// When sources are merged, fields from a higher `precedence` win.
///
/// # Examples
///
/// ```
/// use sandpath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.sandpath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// File the configuration was read from.
    pub path: PathBuf,
    /// 2 for an explicit file, 1 for the user file.
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Finds and parses sandpath configuration files.
///
/// # Examples
///
/// ```no_run
/// use sandpath::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load(None).unwrap() {
///     println!("Loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the configuration file to use.
    ///
    /// An explicit file must exist. Without one, the user configuration is
    /// loaded if present and `Ok(None)` is returned otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if a file exists
    /// but cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Option<ConfigSource>> {
        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            return Ok(Some(ConfigSource {
                path: path.to_path_buf(),
                precedence: 2,
                config,
            }));
        }

        let Some(path) = Self::user_config_path() else {
            log::debug!("No home directory; skipping user configuration");
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        Ok(Some(ConfigSource {
            path,
            precedence: 1,
            config,
        }))
    }

    /// Parse one YAML file. The result is not validated.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] naming the file when it cannot be read, and
    /// [`Error::Configuration`] when its YAML does not match [`Config`].
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// `~/.sandpath/config.yaml`, or `None` without a home directory.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
