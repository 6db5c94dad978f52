#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # sandpath
//!
//! A library for classifying and resolving sandboxed application paths.
//!
//! Given an input that may be an absolute path, a `file://` URL, a network
//! URL, a sandbox alias (`Documents/notes.txt`), a bundle resource or a
//! relative path, sandpath classifies it, normalizes it, and produces a
//! canonical absolute path together with existence and access metadata.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: the resolution engine
//! - [`PathType`] and [`ResolutionResult`]: classification and outcome
//! - [`SandboxRoots`], [`FsProbe`] and [`BundleLookup`]: the collaborators
//!   the engine is built on, with [`SandboxLayout`], [`SystemProbe`] and
//!   [`DirectoryBundle`] as production implementations
//! - [`Error`] and [`Result`]: Error handling types
//! - [`LogLevel`] and [`init_logger`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use sandpath::probe::MockFileSystem;
//! use sandpath::{DirectoryBundle, PathResolver, PathType, SandboxLayout};
//! use std::path::Path;
//!
//! let roots = SandboxLayout::with_container(Path::new("/c"), Path::new("/b/App.app"));
//! let fs = MockFileSystem::new().with_dir("/c/Documents/inbox");
//! let resolver = PathResolver::new(roots, fs, DirectoryBundle::new());
//!
//! assert_eq!(resolver.detect_path_type("https://example.com"), PathType::NetworkUrl);
//! assert_eq!(resolver.normalize_path("/a//b/../c/"), "/a/c");
//!
//! let info = resolver.resolve_path_info("Documents/inbox/");
//! assert!(info.exists && info.is_directory);
//! assert_eq!(info.canonical_path.as_deref(), Some("/c/Documents/inbox"));
//! ```

pub mod bundle;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod probe;
pub mod sandbox;

// Re-export key types at crate root for convenience
pub use bundle::{BundleLookup, DirectoryBundle};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, ErrorInfo, ErrorKind, Result};
pub use logging::{init_logger, LogLevel};
pub use output::OutputFormat;
pub use path::{PathResolver, PathType, ResolutionResult};
pub use probe::{FsProbe, SystemProbe};
pub use sandbox::{SandboxDirectory, SandboxLayout, SandboxRoots};
