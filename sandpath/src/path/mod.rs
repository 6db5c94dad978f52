//! Path classification, normalization and resolution.
//!
//! # Key Concepts
//!
//! ## Classification
//!
//! Every input string has exactly one [`PathType`]: a network or `file://`
//! URL, a location inside one of the sandbox directories (given either as an
//! absolute path or as an alias such as `Documents/notes.txt`), a bundle
//! resource, a plain absolute path, a relative path, or `Unknown`.
//!
//! ## Normalization
//!
//! Normalization is lexical: it collapses separators and resolves `.` and
//! `..` without touching the filesystem.
//!
//! ## Resolution
//!
//! Resolution maps the classified input to an absolute location, probes it,
//! and follows symbolic links to a canonical path. The outcome is a
//! [`ResolutionResult`] that carries any failure as data.
//!
//! # Examples
//!
//! ```
//! use sandpath::path::PathResolver;
//! use sandpath::probe::MockFileSystem;
//! use sandpath::{DirectoryBundle, PathType, SandboxLayout};
//! use std::path::Path;
//!
//! let roots = SandboxLayout::with_container(Path::new("/c"), Path::new("/b/App.app"));
//! let fs = MockFileSystem::new()
//!     .with_file("/c/Library/Caches/thumb.jpg")
//!     .with_symlink("/c/tmp/latest", "/c/Library/Caches/thumb.jpg");
//! let resolver = PathResolver::new(roots, fs, DirectoryBundle::new());
//!
//! assert_eq!(resolver.detect_path_type("Tmp/latest"), PathType::Tmp);
//!
//! let info = resolver.resolve_path_info("Tmp/latest");
//! assert_eq!(info.path_type, PathType::SymbolicLink);
//! assert_eq!(info.canonical_path.as_deref(), Some("/c/Library/Caches/thumb.jpg"));
//! ```
//!
//! # Path Relationships
//!
//! Root matching is component-wise:
//!
//! ```
//! use sandpath::path::PathRelationship;
//! use std::path::Path;
//!
//! let root = Path::new("/c/Documents");
//! assert!(PathRelationship::is_within(Path::new("/c/Documents/a"), root));
//! assert!(!PathRelationship::is_within(Path::new("/c/Documents2"), root));
//! ```

pub mod classify;
pub mod normalize;
pub mod relationship;
pub mod resolver;
pub mod symlink;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use classify::{Anchor, Classification};
pub use relationship::PathRelationship;
pub use resolver::PathResolver;
pub use types::{PathType, ResolutionResult};
