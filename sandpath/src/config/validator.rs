//! Configuration validation.

use crate::config::schema::{Config, RootsConfig};
use crate::error::{Error, Result};
use std::path::Path;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use sandpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { max_symlink_hops: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref container) = config.container {
            Self::validate_absolute("container", container)?;
        }

        if let Some(ref bundle) = config.bundle {
            Self::validate_absolute("bundle", bundle)?;
        }

        if let Some(ref roots) = config.roots {
            Self::validate_roots(roots)?;
        }

        if config.max_symlink_hops == Some(0) {
            return Err(Error::Validation {
                field: "max_symlink_hops".into(),
                message: "Must be at least 1".into(),
            });
        }

        if let Some(ref langs) = config.localizations {
            for lang in langs {
                Self::validate_localization(lang)?;
            }
        }

        Ok(())
    }

    fn validate_roots(roots: &RootsConfig) -> Result<()> {
        let fields = [
            ("roots.documents", &roots.documents),
            ("roots.library", &roots.library),
            ("roots.cache", &roots.cache),
            ("roots.tmp", &roots.tmp),
            ("roots.application_support", &roots.application_support),
        ];
        for (field, value) in fields {
            if let Some(path) = value {
                Self::validate_absolute(field, path)?;
            }
        }
        Ok(())
    }

    fn validate_absolute(field: &str, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() || !path.is_absolute() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Path must be absolute, got '{}'", path.display()),
            });
        }
        Ok(())
    }

    fn validate_localization(lang: &str) -> Result<()> {
        if lang.trim().is_empty() {
            return Err(Error::Validation {
                field: "localizations".into(),
                message: "Localization names cannot be empty".into(),
            });
        }
        if lang.contains(['/', '\\']) || lang == "." || lang == ".." {
            return Err(Error::Validation {
                field: "localizations".into(),
                message: format!("Invalid localization name '{lang}'"),
            });
        }
        Ok(())
    }
}
