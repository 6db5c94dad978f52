//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary container and bundle
//! - Command builder helpers that isolate tests from the user's environment
//! - Fixture helpers for files, directories and links

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's setup into a test.
const ISOLATED_VARS: [&str; 11] = [
    "SANDPATH_CONTAINER",
    "SANDPATH_BUNDLE_DIR",
    "SANDPATH_DOCUMENTS_DIR",
    "SANDPATH_LIBRARY_DIR",
    "SANDPATH_CACHE_DIR",
    "SANDPATH_TMP_DIR",
    "SANDPATH_APPLICATION_SUPPORT_DIR",
    "SANDPATH_MAX_SYMLINK_HOPS",
    "SANDPATH_LOCALIZATIONS",
    "SANDPATH_OUTPUT_FORMAT",
    "SANDPATH_LOG_MODE",
];

/// Test environment with an isolated sandbox container and bundle.
///
/// The container is laid out conventionally: `Documents`, `Library`,
/// `Library/Caches`, `Library/Application Support` and `tmp` all exist.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Application container
    pub container: PathBuf,
    /// Main bundle directory
    pub bundle: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let container = temp_path.join("container");
        let bundle = temp_path.join("App.app");

        for dir in [
            "Documents",
            "Library/Caches",
            "Library/Application Support",
            "tmp",
        ] {
            std::fs::create_dir_all(container.join(dir)).expect("Failed to create sandbox dir");
        }
        std::fs::create_dir_all(bundle.join("Resources")).expect("Failed to create bundle");

        Self {
            temp_dir,
            temp_path,
            container,
            bundle,
        }
    }

    /// Get a bare command builder without --container or --bundle-dir.
    ///
    /// HOME points at the temporary directory and every `SANDPATH_*`
    /// variable is removed, so no user configuration is picked up.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");
        cmd.env("HOME", &self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the container and bundle pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--container")
            .arg(&self.container)
            .arg("--bundle-dir")
            .arg(&self.bundle);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Absolute path of `relative` inside the container.
    pub fn in_container(&self, relative: &str) -> PathBuf {
        self.container.join(relative)
    }

    /// Create a file (and its parents) under the temporary directory.
    pub fn create_file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a symbolic link at `link` (relative to the temp dir) pointing
    /// at `target` verbatim.
    #[cfg(unix)]
    pub fn create_symlink(&self, link: &str, target: impl AsRef<Path>) -> PathBuf {
        let path = self.temp_path.join(link);
        std::os::unix::fs::symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write a YAML configuration file and return its path.
    pub fn write_config(&self, name: &str, yaml: &str) -> PathBuf {
        self.create_file(name, yaml)
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(&self, cmd: &mut Command) -> String {
        let output = cmd.output().expect("Failed to run sandpath");
        assert!(
            output.status.success(),
            "Command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a path the way the CLI prints it.
#[allow(dead_code)]
pub fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
