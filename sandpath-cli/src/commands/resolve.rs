//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which classifies each
//! input, maps it onto the filesystem and reports what is there.

use crate::error::CliError;
use crate::utils::{build_resolver, print_output, GlobalOptions};
use clap::Args;
use sandpath::output::OutputFormat;

/// Resolve paths and report existence and access.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths, aliases or URLs to resolve
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "SANDPATH_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Print only the best available path for each input, one per line
    #[arg(long)]
    pub canonical_only: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Build the resolver from configuration
        let resolver = build_resolver(global)?;

        // 2. Resolve every input independently
        let results = resolver.resolve_all(&self.paths);

        // 3. Print results
        if self.canonical_only {
            for result in &results {
                match result.best_path() {
                    Some(path) => println!("{path}"),
                    None => println!(),
                }
            }
        } else {
            let output = self.format.create_formatter().format(&results)?;
            print_output(&output);
        }

        // 4. Report failures
        let failures: Vec<_> = results.iter().filter(|r| !r.is_ok()).collect();
        for result in &failures {
            if let Some(ref error) = result.error {
                log::warn!("{}: {error}", result.original_path);
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} of {} paths failed to resolve",
                failures.len(),
                results.len()
            )))
        }
    }
}
