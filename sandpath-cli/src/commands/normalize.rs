//! Command to normalize paths lexically.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use sandpath::path::normalize::normalize;

/// Normalize paths without consulting the filesystem.
///
/// Removes `.` segments, collapses `..` against the preceding segment and
/// squeezes repeated separators.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        for path in &self.paths {
            println!("{}", normalize(path));
        }
        Ok(())
    }
}
