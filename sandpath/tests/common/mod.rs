//! Common test utilities for integration tests.
//!
//! This module provides a real on-disk sandbox fixture for testing the
//! sandpath library against the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use sandpath::{DirectoryBundle, PathResolver, SandboxLayout, SystemProbe};
use tempfile::TempDir;

/// A temporary application container and bundle.
///
/// The container is laid out conventionally and every sandbox directory
/// exists. The directory is removed when the fixture is dropped.
pub struct Sandbox {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path of the temporary directory.
    pub root: PathBuf,
    /// Application container.
    pub container: PathBuf,
    /// Main bundle directory.
    pub bundle: PathBuf,
}

#[allow(dead_code)]
impl Sandbox {
    /// Create the container and bundle directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Canonical so that expected paths match on systems where the temp
        // directory sits behind a symbolic link.
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let container = root.join("container");
        let bundle = root.join("App.app");

        for dir in [
            "Documents",
            "Library/Caches",
            "Library/Application Support",
            "tmp",
        ] {
            fs::create_dir_all(container.join(dir)).expect("Failed to create sandbox dir");
        }
        fs::create_dir_all(bundle.join("Resources")).expect("Failed to create bundle");

        Self {
            temp_dir,
            root,
            container,
            bundle,
        }
    }

    /// The layout of this sandbox.
    pub fn layout(&self) -> SandboxLayout {
        SandboxLayout::with_container(&self.container, &self.bundle)
    }

    /// A resolver over the real filesystem for this sandbox.
    pub fn resolver(&self) -> PathResolver<SandboxLayout, SystemProbe, DirectoryBundle> {
        PathResolver::new(self.layout(), SystemProbe, DirectoryBundle::new())
    }

    /// Write a file (and its parents) relative to the temporary root.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Create a directory relative to the temporary root.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a symbolic link relative to the temporary root.
    #[cfg(unix)]
    pub fn symlink(&self, link: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.root.join(link);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

/// Lossy string form of a path, as the resolver reports it.
#[allow(dead_code)]
pub fn s(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
