//! Command to check a configuration file without using it.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use sandpath::config::{ConfigLoader, ConfigValidator};
use sandpath::Error as LibError;
use std::path::PathBuf;

/// Parse and validate a sandpath configuration file.
///
/// Environment variables and other files are not consulted; only the named
/// file is checked.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "Not a file: {}",
                self.config_path.display()
            )));
        }

        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(config) => config,
            Err(LibError::Configuration(e)) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(format!(
                    "{} is not a valid configuration file",
                    self.config_path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(format!(
                "{} failed validation",
                self.config_path.display()
            )));
        }

        log::info!(
            "max_symlink_hops = {}, localizations = {:?}",
            config.max_symlink_hops(),
            config.localizations()
        );
        println!("Configuration is valid");
        Ok(())
    }
}
