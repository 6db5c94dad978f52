//! Command to follow a symbolic link chain.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Follow a symbolic link chain to its final target.
///
/// Prints nothing when the path is not a link or does not exist.
#[derive(Args)]
pub struct ReadlinkCommand {
    /// Path, alias or file URL of the link
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Maximum number of links to follow
    #[arg(long, value_name = "HOPS")]
    pub max_hops: Option<usize>,
}

impl ReadlinkCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = build_resolver(global)?;

        if let Some(hops) = self.max_hops {
            if hops == 0 {
                return Err(CliError::InvalidArguments(
                    "--max-hops must be at least 1".to_string(),
                ));
            }
            resolver = resolver.with_max_symlink_hops(hops);
        }

        match resolver.resolve_symbolic_link(&self.path)? {
            Some(target) => println!("{target}"),
            None => log::info!("{} is not a symbolic link", self.path),
        }

        Ok(())
    }
}
