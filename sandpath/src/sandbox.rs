//! Sandbox directory roots.
//!
//! An application instance owns a handful of well-known directories. The
//! resolver never decides where they live; it asks a [`SandboxRoots`]
//! implementation on every call. [`SandboxLayout`] is the production
//! implementation, built from configuration.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};

/// The well-known directories of an application instance.
///
/// # Examples
///
/// ```
/// use sandpath::SandboxDirectory;
///
/// assert_eq!(SandboxDirectory::Documents.alias(), "Documents");
/// assert_eq!(
///     SandboxDirectory::from_alias("ApplicationSupport"),
///     Some(SandboxDirectory::ApplicationSupport)
/// );
/// assert_eq!(SandboxDirectory::from_alias("documents"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SandboxDirectory {
    /// User-visible documents.
    Documents,
    /// Private application library.
    Library,
    /// Purgeable caches.
    Cache,
    /// Temporary files.
    Tmp,
    /// Application support files.
    ApplicationSupport,
    /// The application's read-only resource bundle.
    Bundle,
}

impl SandboxDirectory {
    /// Every directory, in classification order.
    pub const ALL: [Self; 6] = [
        Self::Documents,
        Self::Library,
        Self::Cache,
        Self::Tmp,
        Self::ApplicationSupport,
        Self::Bundle,
    ];

    /// The writable sandbox directories (everything except the bundle), in
    /// classification order.
    pub const SANDBOX: [Self; 5] = [
        Self::Documents,
        Self::Library,
        Self::Cache,
        Self::Tmp,
        Self::ApplicationSupport,
    ];

    /// The alias label accepted as the first segment of an input path.
    #[must_use]
    pub const fn alias(self) -> &'static str {
        match self {
            Self::Documents => "Documents",
            Self::Library => "Library",
            Self::Cache => "Cache",
            Self::Tmp => "Tmp",
            Self::ApplicationSupport => "ApplicationSupport",
            Self::Bundle => "Bundle",
        }
    }

    /// Look up a directory by its exact alias label.
    #[must_use]
    pub fn from_alias(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dir| dir.alias() == label)
    }
}

impl fmt::Display for SandboxDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// Source of the real absolute root for each sandbox directory.
///
/// Implementations must return absolute paths. They may return different
/// answers over time; the resolver never caches them.
#[cfg_attr(test, mockall::automock)]
pub trait SandboxRoots: Send + Sync {
    /// The current absolute root for `directory`.
    fn root_for(&self, directory: SandboxDirectory) -> PathBuf;
}

/// A fixed set of sandbox roots.
///
/// # Examples
///
/// ```
/// use sandpath::{SandboxDirectory, SandboxLayout, SandboxRoots};
/// use std::path::Path;
///
/// let layout = SandboxLayout::with_container(Path::new("/c"), Path::new("/b/App.app"));
/// assert_eq!(layout.root_for(SandboxDirectory::Cache), Path::new("/c/Library/Caches"));
/// assert_eq!(layout.root_for(SandboxDirectory::Bundle), Path::new("/b/App.app"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxLayout {
    documents: PathBuf,
    library: PathBuf,
    cache: PathBuf,
    tmp: PathBuf,
    application_support: PathBuf,
    bundle: PathBuf,
}

impl SandboxLayout {
    /// Lay out every sandbox directory beneath `container`.
    ///
    /// Uses the conventional container structure: `Documents`, `Library`,
    /// `Library/Caches`, `Library/Application Support` and `tmp`.
    #[must_use]
    pub fn with_container(container: &Path, bundle: &Path) -> Self {
        let library = container.join("Library");
        Self {
            documents: container.join("Documents"),
            cache: library.join("Caches"),
            application_support: library.join("Application Support"),
            library,
            tmp: container.join("tmp"),
            bundle: bundle.to_path_buf(),
        }
    }

    /// Build the layout described by `config`.
    ///
    /// Without a configured container the user's home directory is the
    /// container and the OS temporary directory is `Tmp`. Without a
    /// configured bundle the directory holding the running executable is the
    /// bundle. Individual root overrides win over both.
    ///
    /// # Errors
    ///
    /// Returns an error if a default cannot be determined (no home directory,
    /// no executable path) or a configured root is not absolute.
    pub fn from_config(config: &Config) -> Result<Self> {
        let bundle = match &config.bundle {
            Some(bundle) => bundle.clone(),
            None => default_bundle_dir()?,
        };

        let mut layout = match &config.container {
            Some(container) => Self::with_container(container, &bundle),
            None => {
                let home = home::home_dir().ok_or_else(|| Error::Validation {
                    field: "container".to_string(),
                    message: "Cannot determine home directory; set a container".to_string(),
                })?;
                let mut layout = Self::with_container(&home, &bundle);
                layout.tmp = env::temp_dir();
                layout
            }
        };

        if let Some(roots) = &config.roots {
            let overrides = [
                (SandboxDirectory::Documents, &roots.documents),
                (SandboxDirectory::Library, &roots.library),
                (SandboxDirectory::Cache, &roots.cache),
                (SandboxDirectory::Tmp, &roots.tmp),
                (SandboxDirectory::ApplicationSupport, &roots.application_support),
            ];
            for (directory, path) in overrides {
                if let Some(path) = path {
                    layout = layout.with_root(directory, path.clone());
                }
            }
        }

        for directory in SandboxDirectory::ALL {
            let root = layout.root_for(directory);
            if !root.is_absolute() {
                return Err(Error::Validation {
                    field: directory.alias().to_string(),
                    message: format!("Root must be absolute: {}", root.display()),
                });
            }
        }

        Ok(layout)
    }

    /// Replace a single root.
    #[must_use]
    pub fn with_root(mut self, directory: SandboxDirectory, root: PathBuf) -> Self {
        *self.slot_mut(directory) = root;
        self
    }

    fn slot_mut(&mut self, directory: SandboxDirectory) -> &mut PathBuf {
        match directory {
            SandboxDirectory::Documents => &mut self.documents,
            SandboxDirectory::Library => &mut self.library,
            SandboxDirectory::Cache => &mut self.cache,
            SandboxDirectory::Tmp => &mut self.tmp,
            SandboxDirectory::ApplicationSupport => &mut self.application_support,
            SandboxDirectory::Bundle => &mut self.bundle,
        }
    }
}

impl SandboxRoots for SandboxLayout {
    fn root_for(&self, directory: SandboxDirectory) -> PathBuf {
        match directory {
            SandboxDirectory::Documents => self.documents.clone(),
            SandboxDirectory::Library => self.library.clone(),
            SandboxDirectory::Cache => self.cache.clone(),
            SandboxDirectory::Tmp => self.tmp.clone(),
            SandboxDirectory::ApplicationSupport => self.application_support.clone(),
            SandboxDirectory::Bundle => self.bundle.clone(),
        }
    }
}

fn default_bundle_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::Validation {
            field: "bundle".to_string(),
            message: format!("Executable has no parent directory: {}", exe.display()),
        })
}
