//! Input classification.
//!
//! Classification is total: every string maps to exactly one [`PathType`].
//! Rules apply in order and the first match wins:
//!
//! 1. `http://` / `https://` prefix: network URL
//! 2. `file://` prefix: file URL
//! 3. Sandbox alias (`Documents/...`) or a path inside a sandbox root
//! 4. Bundle alias (`Bundle/...`) or a path inside the bundle root
//! 5. Leading `/`: absolute
//! 6. Anything else non-empty: relative
//!
//! Empty, whitespace-only and NUL-containing input is `Unknown`.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::normalize::{confine, normalize};
use crate::path::relationship::{self, PathRelationship};
use crate::path::types::PathType;
use crate::sandbox::{SandboxDirectory, SandboxRoots};

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";
const FILE_SCHEME: &str = "file://";

/// How an input is tied to a sandbox directory or the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// The input starts with the directory's alias label; `remainder` is
    /// everything after `"<Alias>/"`, normalized and confined to the
    /// directory (empty for the bare alias).
    Alias {
        /// The aliased directory.
        directory: SandboxDirectory,
        /// Path below the directory root.
        remainder: String,
    },
    /// The input is an absolute path at or below the directory's root.
    Root {
        /// The containing directory.
        directory: SandboxDirectory,
    },
}

impl Anchor {
    /// The directory this anchor refers to.
    #[must_use]
    pub fn directory(&self) -> SandboxDirectory {
        match self {
            Self::Alias { directory, .. } | Self::Root { directory } => *directory,
        }
    }
}

/// The result of classifying one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// The input's type.
    pub path_type: PathType,
    /// The sandbox directory or bundle the input belongs to, if any.
    pub anchor: Option<Anchor>,
}

impl Classification {
    fn plain(path_type: PathType) -> Self {
        Self {
            path_type,
            anchor: None,
        }
    }

    fn anchored(anchor: Anchor) -> Self {
        Self {
            path_type: anchor.directory().into(),
            anchor: Some(anchor),
        }
    }
}

/// Classify `input` against the current `roots`.
///
/// Roots are read from the provider on every call.
///
/// # Examples
///
/// ```
/// use sandpath::path::classify::classify;
/// use sandpath::{PathType, SandboxLayout};
/// use std::path::Path;
///
/// let roots = SandboxLayout::with_container(Path::new("/c"), Path::new("/b/App.app"));
///
/// assert_eq!(classify("https://example.com", &roots).path_type, PathType::NetworkUrl);
/// assert_eq!(classify("/c/Documents/a.txt", &roots).path_type, PathType::Documents);
/// assert_eq!(classify("Documents/a.txt", &roots).path_type, PathType::Documents);
/// assert_eq!(classify("/c/Library/Caches/x", &roots).path_type, PathType::Cache);
/// assert_eq!(classify("/b/App.app/Info.plist", &roots).path_type, PathType::BundleResource);
/// assert_eq!(classify("/etc/hosts", &roots).path_type, PathType::Absolute);
/// assert_eq!(classify("notes.txt", &roots).path_type, PathType::Relative);
/// assert_eq!(classify("   ", &roots).path_type, PathType::Unknown);
/// ```
pub fn classify<R>(input: &str, roots: &R) -> Classification
where
    R: SandboxRoots + ?Sized,
{
    if input.trim().is_empty() || input.contains('\0') {
        return Classification::plain(PathType::Unknown);
    }

    if has_scheme(input, HTTP_SCHEME) || has_scheme(input, HTTPS_SCHEME) {
        return Classification::plain(PathType::NetworkUrl);
    }

    if has_scheme(input, FILE_SCHEME) {
        return Classification::plain(PathType::FileUrl);
    }

    if let Some(anchor) = alias_anchor(input) {
        return Classification::anchored(anchor);
    }

    if input.starts_with('/') {
        let normalized = normalize(input);
        let candidate = Path::new(&normalized);

        if let Some(directory) = containing_sandbox_root(candidate, roots) {
            return Classification::anchored(Anchor::Root { directory });
        }

        let bundle = roots.root_for(SandboxDirectory::Bundle);
        if !bundle.as_os_str().is_empty() && within_root(candidate, &bundle) {
            return Classification::anchored(Anchor::Root {
                directory: SandboxDirectory::Bundle,
            });
        }

        return Classification::plain(PathType::Absolute);
    }

    Classification::plain(PathType::Relative)
}

/// Extract the filesystem path from a `file://` URL.
///
/// The authority must be empty or `localhost`. The path is percent-decoded;
/// a query or fragment is dropped.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedPathFormat`] if the input is not a `file://`
/// URL, names a remote host, has no absolute path, or does not decode to
/// UTF-8.
///
/// # Examples
///
/// ```
/// use sandpath::path::classify::file_url_path;
///
/// assert_eq!(file_url_path("file:///tmp/My%20File.txt").unwrap(), "/tmp/My File.txt");
/// assert_eq!(file_url_path("FILE://localhost/etc/hosts").unwrap(), "/etc/hosts");
/// assert!(file_url_path("file://server/share").is_err());
/// ```
pub fn file_url_path(input: &str) -> Result<String> {
    let unrecognized = || Error::UnrecognizedPathFormat {
        input: input.to_string(),
    };

    if !has_scheme(input, FILE_SCHEME) {
        return Err(unrecognized());
    }
    let rest = &input[FILE_SCHEME.len()..];

    let path = match rest.find('/') {
        Some(0) => rest,
        Some(slash) if rest[..slash].eq_ignore_ascii_case("localhost") => &rest[slash..],
        _ => return Err(unrecognized()),
    };

    let path = path.split(['?', '#']).next().unwrap_or_default();
    let decoded = urlencoding::decode(path).map_err(|_| unrecognized())?;

    if decoded.contains('\0') {
        return Err(unrecognized());
    }
    Ok(decoded.into_owned())
}

/// ASCII case-insensitive prefix check.
fn has_scheme(input: &str, scheme: &str) -> bool {
    input
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

/// `"<Alias>"` or `"<Alias>/..."` for any directory, including the bundle.
fn alias_anchor(input: &str) -> Option<Anchor> {
    let (head, remainder) = match input.split_once('/') {
        Some((head, rest)) => (head, rest),
        None => (input, ""),
    };
    let directory = SandboxDirectory::from_alias(head)?;
    Some(Anchor::Alias {
        directory,
        remainder: confine(remainder),
    })
}

/// The most specific sandbox root containing `candidate`.
///
/// Ties keep the first directory in classification order.
fn containing_sandbox_root<R>(candidate: &Path, roots: &R) -> Option<SandboxDirectory>
where
    R: SandboxRoots + ?Sized,
{
    let mut best: Option<(SandboxDirectory, usize)> = None;

    for directory in SandboxDirectory::SANDBOX {
        let root = roots.root_for(directory);
        if root.as_os_str().is_empty() || !within_root(candidate, &root) {
            continue;
        }
        let depth = relationship::depth(&root);
        if best.map_or(true, |(_, best_depth)| depth > best_depth) {
            best = Some((directory, depth));
        }
    }

    best.map(|(directory, _)| directory)
}

fn within_root(candidate: &Path, root: &Path) -> bool {
    let root = normalize(&root.to_string_lossy());
    let root = Path::new(&root);
    let within = PathRelationship::is_within(candidate, root);
    if within {
        log::trace!(
            "{}",
            PathRelationship::between(candidate, root).description(candidate, root)
        );
    }
    within
}
