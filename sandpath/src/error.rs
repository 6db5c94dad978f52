//! Error types for the sandpath library.
//!
//! Resolution failures are reported two ways: as an [`Error`] from operations
//! that return `Result`, and as an [`ErrorInfo`] attached to a
//! [`ResolutionResult`](crate::path::ResolutionResult). Both carry an
//! [`ErrorKind`] so callers can branch on the failure category.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Result type alias for operations that may fail with a sandpath error.
///
/// # Examples
///
/// ```
/// use sandpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/var/mobile".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the sandpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be classified as any supported path form.
    #[error("unrecognized path format: {input:?}")]
    UnrecognizedPathFormat {
        /// The verbatim input.
        input: String,
    },

    /// A relative path could not be anchored to a base directory.
    #[error("cannot resolve relative path {input:?}: {reason}")]
    UnresolvableRelativePath {
        /// The verbatim input.
        input: String,
        /// Why no base directory was available.
        reason: String,
    },

    /// Permission denied while probing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// A filesystem probe failed for a reason other than "not found".
    #[error("I/O failure at {}: {source}", path.display())]
    IoFailure {
        /// The path being probed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A symbolic link chain revisited a path it had already passed through.
    #[error("symlink cycle detected: {}", path.display())]
    SymlinkCycle {
        /// The first path seen twice.
        path: PathBuf,
    },

    /// A symbolic link chain was longer than the hop limit.
    #[error("too many symlink hops from {} (max {max_hops})", path.display())]
    SymlinkDepthExceeded {
        /// The path the chain started from.
        path: PathBuf,
        /// The configured hop limit.
        max_hops: usize,
    },

    /// A bundle resource lookup found nothing (strict lookups only).
    #[error("resource {name:?} not found in bundle {}", bundle.display())]
    ResourceNotFound {
        /// The requested resource, including its extension if one was given.
        name: String,
        /// The bundle root that was searched.
        bundle: PathBuf,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// Results could not be rendered in the requested output format.
    #[error("cannot render {format} output: {reason}")]
    Serialization {
        /// The output format name.
        format: &'static str,
        /// The serializer's message.
        reason: String,
    },

    /// An I/O error occurred outside of path probing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure categories a path resolution can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// The input is empty or matches no known path form.
    UnrecognizedPathFormat,
    /// A relative input had no usable base directory.
    UnresolvableRelativePath,
    /// The filesystem refused access to an entry.
    FilesystemAccessDenied,
    /// Any other filesystem failure.
    #[serde(rename = "IOFailure")]
    IoFailure,
    /// A symbolic link chain loops back on itself.
    SymlinkCycle,
    /// A symbolic link chain exceeds the hop limit.
    SymlinkDepthExceeded,
    /// A strict bundle lookup found nothing.
    ResourceNotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UnrecognizedPathFormat => "UnrecognizedPathFormat",
            Self::UnresolvableRelativePath => "UnresolvableRelativePath",
            Self::FilesystemAccessDenied => "FilesystemAccessDenied",
            Self::IoFailure => "IOFailure",
            Self::SymlinkCycle => "SymlinkCycle",
            Self::SymlinkDepthExceeded => "SymlinkDepthExceeded",
            Self::ResourceNotFound => "ResourceNotFound",
        };
        f.write_str(label)
    }
}

/// A failure attached to a [`ResolutionResult`](crate::path::ResolutionResult).
///
/// Unlike [`Error`], this is a plain value: cloneable, comparable and
/// serializable.
///
/// # Examples
///
/// ```
/// use sandpath::{Error, ErrorInfo, ErrorKind};
///
/// let err = Error::UnrecognizedPathFormat { input: "  ".to_string() };
/// let info = ErrorInfo::from(&err);
/// assert_eq!(info.kind, ErrorKind::UnrecognizedPathFormat);
/// assert_eq!(info.path, "  ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    /// Failure category.
    pub kind: ErrorKind,
    /// The path or input the failure refers to.
    pub path: String,
    /// Human-readable description.
    pub message: String,
}

impl From<&Error> for ErrorInfo {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind().unwrap_or(ErrorKind::IoFailure),
            path: err.subject().unwrap_or_default(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl Error {
    /// Wrap a failed filesystem probe of `path`.
    ///
    /// Permission failures become [`Error::PermissionDenied`]; everything else
    /// becomes [`Error::IoFailure`]. Callers filter out "not found" before
    /// calling this, since a missing entry is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::{Error, ErrorKind};
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
    /// let err = Error::from_probe(Path::new("/private"), denied);
    /// assert_eq!(err.kind(), Some(ErrorKind::FilesystemAccessDenied));
    /// ```
    #[must_use]
    pub fn from_probe(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::IoFailure {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    /// The resolution error category, if this error can occur during path
    /// resolution.
    ///
    /// Configuration, validation and serialization errors have no category.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::{Error, ErrorKind};
    /// use std::path::PathBuf;
    ///
    /// let err = Error::SymlinkCycle { path: PathBuf::from("/a") };
    /// assert_eq!(err.kind(), Some(ErrorKind::SymlinkCycle));
    ///
    /// let err = Error::Validation { field: "roots".into(), message: "bad".into() };
    /// assert_eq!(err.kind(), None);
    /// ```
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::UnrecognizedPathFormat { .. } => Some(ErrorKind::UnrecognizedPathFormat),
            Self::UnresolvableRelativePath { .. } => Some(ErrorKind::UnresolvableRelativePath),
            Self::PermissionDenied { .. } => Some(ErrorKind::FilesystemAccessDenied),
            Self::IoFailure { .. } | Self::Io(_) => Some(ErrorKind::IoFailure),
            Self::SymlinkCycle { .. } => Some(ErrorKind::SymlinkCycle),
            Self::SymlinkDepthExceeded { .. } => Some(ErrorKind::SymlinkDepthExceeded),
            Self::ResourceNotFound { .. } => Some(ErrorKind::ResourceNotFound),
            Self::Configuration(_) | Self::Validation { .. } | Self::Serialization { .. } => None,
        }
    }

    /// The input or path this error is about, when it names one.
    #[must_use]
    pub fn subject(&self) -> Option<String> {
        match self {
            Self::UnrecognizedPathFormat { input } | Self::UnresolvableRelativePath { input, .. } => {
                Some(input.clone())
            }
            Self::PermissionDenied { path }
            | Self::IoFailure { path, .. }
            | Self::SymlinkCycle { path }
            | Self::SymlinkDepthExceeded { path, .. } => Some(path.display().to_string()),
            Self::ResourceNotFound { name, .. } => Some(name.clone()),
            Self::Configuration(_)
            | Self::Validation { .. }
            | Self::Serialization { .. }
            | Self::Io(_) => None,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
