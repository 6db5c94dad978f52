//! Main entry point for the sandpath CLI.
//!
//! This is the command-line interface for the sandpath resolution engine.
//! It provides commands for working with application paths:
//! - `resolve`: Resolve paths and report existence and access
//! - `classify`: Print the type of each path
//! - `normalize`: Normalize paths lexically
//! - `readlink`: Follow a symbolic link chain
//! - `resource`: Look up a bundle resource
//! - `roots`: Show the sandbox directory roots
//! - `validate`: Validate a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = sandpath::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        container: cli.container,
        bundle_dir: cli.bundle_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Readlink(cmd) => cmd.execute(&global),
        cli::Command::Resource(cmd) => cmd.execute(&global),
        cli::Command::Roots(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
