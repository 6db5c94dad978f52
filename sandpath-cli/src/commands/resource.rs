//! Command to look up a named resource in a bundle.

use crate::error::CliError;
use crate::utils::{absolutize, build_resolver, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Look up a named resource in a bundle.
///
/// Searches the bundle root, then `Resources/`, then each localization
/// directory.
#[derive(Args)]
pub struct ResourceCommand {
    /// Resource name, without extension
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Resource extension (a leading '.' is ignored)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Search this bundle instead of the main bundle
    #[arg(long, value_name = "DIR")]
    pub bundle: Option<PathBuf>,

    /// Fail when the resource does not exist
    #[arg(long)]
    pub strict: bool,
}

impl ResourceCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        let bundle = self.bundle.as_deref().map(absolutize).transpose()?;
        let ext = self.ext.as_deref();

        if self.strict {
            let path = resolver.resolve_resource_strict(&self.name, ext, bundle.as_deref())?;
            println!("{path}");
            return Ok(());
        }

        match resolver.resolve_resource_path(&self.name, ext, bundle.as_deref()) {
            Some(path) => println!("{path}"),
            None => log::info!("resource {} not found", self.name),
        }
        Ok(())
    }
}
