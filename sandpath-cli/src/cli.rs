//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ClassifyCommand, CompletionsCommand, NormalizeCommand, ReadlinkCommand, ResolveCommand,
    ResourceCommand, RootsCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for classifying and resolving sandboxed application paths.
#[derive(Parser)]
#[command(name = "sandpath")]
#[command(
    version,
    about = "Classify and resolve sandboxed application paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.sandpath/config.yaml
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Application container holding Documents, Library and tmp
    #[arg(long, value_name = "DIR", global = true, env = "SANDPATH_CONTAINER")]
    pub container: Option<PathBuf>,

    /// Main bundle directory
    #[arg(long, value_name = "DIR", global = true, env = "SANDPATH_BUNDLE_DIR")]
    pub bundle_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve paths and report what is there
    Resolve(ResolveCommand),

    /// Print the type of each path
    Classify(ClassifyCommand),

    /// Normalize paths lexically
    Normalize(NormalizeCommand),

    /// Follow a symbolic link chain to its final target
    Readlink(ReadlinkCommand),

    /// Look up a named resource in a bundle
    Resource(ResourceCommand),

    /// Show the sandbox directory roots
    Roots(RootsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
