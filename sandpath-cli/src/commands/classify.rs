//! Command to print the type of each path.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Print the type of each path without touching the filesystem.
#[derive(Args)]
pub struct ClassifyCommand {
    /// Paths, aliases or URLs to classify
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print the human-readable description instead of the type name
    #[arg(long)]
    pub describe: bool,
}

impl ClassifyCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        for path in &self.paths {
            let path_type = resolver.detect_path_type(path);
            if self.describe {
                println!("{}", resolver.path_type_description(path_type));
            } else {
                println!("{path_type}");
            }
        }

        Ok(())
    }
}
