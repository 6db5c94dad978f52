//! Core types for path resolution.

use std::fmt;

use serde::Serialize;

use crate::error::ErrorInfo;
use crate::sandbox::SandboxDirectory;

/// The form an input path takes.
///
/// Every input maps to exactly one variant. [`PathType::SymbolicLink`] is
/// never produced by classification; it only appears on a
/// [`ResolutionResult`] whose entry turned out to be a link.
///
/// # Examples
///
/// ```
/// use sandpath::PathType;
///
/// assert_eq!(PathType::FileUrl.to_string(), "FileURL");
/// assert_eq!(PathType::FileUrl.description(), "File URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PathType {
    /// Empty or unrecognizable input.
    Unknown,
    /// An absolute path outside every known root.
    Absolute,
    /// A `file://` URL.
    #[serde(rename = "FileURL")]
    FileUrl,
    /// A resource inside the application bundle.
    BundleResource,
    /// Inside the Documents directory.
    Documents,
    /// Inside the Library directory.
    Library,
    /// Inside the Cache directory.
    Cache,
    /// Inside the temporary directory.
    Tmp,
    /// Inside the Application Support directory.
    ApplicationSupport,
    /// A path relative to the working directory.
    Relative,
    /// The resolved entry is a symbolic link.
    SymbolicLink,
    /// An `http://` or `https://` URL.
    #[serde(rename = "NetworkURL")]
    NetworkUrl,
}

impl PathType {
    /// Every variant.
    pub const ALL: [Self; 12] = [
        Self::Unknown,
        Self::Absolute,
        Self::FileUrl,
        Self::BundleResource,
        Self::Documents,
        Self::Library,
        Self::Cache,
        Self::Tmp,
        Self::ApplicationSupport,
        Self::Relative,
        Self::SymbolicLink,
        Self::NetworkUrl,
    ];

    /// A stable, human-readable label for diagnostics.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Absolute => "Absolute Path",
            Self::FileUrl => "File URL",
            Self::BundleResource => "Bundle Resource",
            Self::Documents => "Documents Directory",
            Self::Library => "Library Directory",
            Self::Cache => "Cache Directory",
            Self::Tmp => "Temporary Directory",
            Self::ApplicationSupport => "Application Support Directory",
            Self::Relative => "Relative Path",
            Self::SymbolicLink => "Symbolic Link",
            Self::NetworkUrl => "Network URL",
        }
    }

    /// Whether this type names a location inside a sandbox directory or the
    /// bundle.
    #[must_use]
    pub const fn is_rooted(self) -> bool {
        matches!(
            self,
            Self::Documents
                | Self::Library
                | Self::Cache
                | Self::Tmp
                | Self::ApplicationSupport
                | Self::BundleResource
        )
    }
}

impl From<SandboxDirectory> for PathType {
    fn from(directory: SandboxDirectory) -> Self {
        match directory {
            SandboxDirectory::Documents => Self::Documents,
            SandboxDirectory::Library => Self::Library,
            SandboxDirectory::Cache => Self::Cache,
            SandboxDirectory::Tmp => Self::Tmp,
            SandboxDirectory::ApplicationSupport => Self::ApplicationSupport,
            SandboxDirectory::Bundle => Self::BundleResource,
        }
    }
}

impl fmt::Display for PathType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "Unknown",
            Self::Absolute => "Absolute",
            Self::FileUrl => "FileURL",
            Self::BundleResource => "BundleResource",
            Self::Documents => "Documents",
            Self::Library => "Library",
            Self::Cache => "Cache",
            Self::Tmp => "Tmp",
            Self::ApplicationSupport => "ApplicationSupport",
            Self::Relative => "Relative",
            Self::SymbolicLink => "SymbolicLink",
            Self::NetworkUrl => "NetworkURL",
        };
        f.write_str(label)
    }
}

/// The outcome of resolving one input.
///
/// Produced fresh on every call. The fields obey these rules:
/// - `error` set means `canonical_path` is absent
/// - `canonical_path` present means `exists`
/// - `resolved_path` is set as soon as the input maps to a filesystem
///   location, whether or not anything exists there
///
/// # Examples
///
/// ```
/// use sandpath::{PathType, ResolutionResult};
///
/// let result = ResolutionResult::new(PathType::Absolute, "/tmp/x");
/// assert_eq!(result.original_path, "/tmp/x");
/// assert!(!result.exists);
/// assert!(result.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// Classified type, or `SymbolicLink` if the entry is a link.
    pub path_type: PathType,
    /// The input, verbatim.
    pub original_path: String,
    /// The absolute, normalized location the input maps to.
    pub resolved_path: Option<String>,
    /// The final, existing location after following links.
    pub canonical_path: Option<String>,
    /// Whether an entry exists at `resolved_path`.
    pub exists: bool,
    /// Whether the entry (or its link target) is a directory.
    pub is_directory: bool,
    /// Whether the entry (or its link target) is readable.
    pub is_readable: bool,
    /// Whether the entry (or its link target) is writable.
    pub is_writable: bool,
    /// The failure, if resolution failed.
    pub error: Option<ErrorInfo>,
}

impl ResolutionResult {
    /// Start a result for `original` with nothing resolved yet.
    #[must_use]
    pub fn new(path_type: PathType, original: impl Into<String>) -> Self {
        Self {
            path_type,
            original_path: original.into(),
            resolved_path: None,
            canonical_path: None,
            exists: false,
            is_directory: false,
            is_readable: false,
            is_writable: false,
            error: None,
        }
    }

    /// Whether resolution completed without an error.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The best available path: the canonical path, else the resolved path
    /// when there was no error.
    #[must_use]
    pub fn best_path(&self) -> Option<&str> {
        if self.canonical_path.is_some() {
            return self.canonical_path.as_deref();
        }
        if self.error.is_some() {
            return None;
        }
        self.resolved_path.as_deref()
    }
}
