//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve paths and report existence and access
//! - `classify`: Print the type of each path
//! - `normalize`: Normalize paths lexically
//! - `readlink`: Follow a symbolic link chain to its final target
//! - `resource`: Look up a named resource in a bundle
//! - `roots`: Show the sandbox directory roots
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod classify;
pub mod completions;
pub mod normalize;
pub mod readlink;
pub mod resolve;
pub mod resource;
pub mod roots;
pub mod validate;

pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use normalize::NormalizeCommand;
pub use readlink::ReadlinkCommand;
pub use resolve::ResolveCommand;
pub use resource::ResourceCommand;
pub use roots::RootsCommand;
pub use validate::ValidateCommand;
