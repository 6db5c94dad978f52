//! Roots command implementation.
//!
//! This module implements the `roots` command, which prints the current root
//! of every sandbox directory and the main bundle.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::{Args, ValueEnum};
use sandpath::SandboxDirectory;
use serde::Serialize;

/// Show the sandbox directory roots.
#[derive(Args)]
pub struct RootsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: RootsFormat,
}

/// Output format for the roots command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RootsFormat {
    /// `Alias: path` lines
    Text,
    /// JSON array of objects
    Json,
    /// YAML sequence
    Yaml,
}

/// One row of roots output.
#[derive(Serialize)]
struct RootEntry {
    directory: SandboxDirectory,
    path: String,
}

impl RootsCommand {
    /// Execute the roots command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;

        let entries: Vec<RootEntry> = SandboxDirectory::ALL
            .into_iter()
            .map(|directory| RootEntry {
                directory,
                path: resolver.sandbox_path(directory),
            })
            .collect();

        match self.format {
            RootsFormat::Text => {
                for entry in &entries {
                    println!("{}: {}", entry.directory, entry.path);
                }
            }
            RootsFormat::Json => {
                let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                    CliError::Library(sandpath::Error::Serialization {
                        format: "json",
                        reason: e.to_string(),
                    })
                })?;
                println!("{json}");
            }
            RootsFormat::Yaml => {
                let yaml = serde_yaml::to_string(&entries).map_err(|e| {
                    CliError::Library(sandpath::Error::Serialization {
                        format: "yaml",
                        reason: e.to_string(),
                    })
                })?;
                print!("{yaml}");
            }
        }

        Ok(())
    }
}
