//! Path normalization functions.
//!
//! Normalization is purely lexical. It never touches the filesystem:
//! - Repeated separators collapse to one
//! - `.` segments are dropped
//! - `..` removes the preceding segment
//! - A trailing separator is stripped unless the result is the root
//!
//! Tilde expansion and anchoring relative paths to a base directory are
//! separate steps, applied by the resolver before normalizing.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Normalize a path string.
///
/// For absolute inputs, a `..` with nothing left to pop is a no-op (the root
/// has no parent). For relative inputs such leading `..` segments are kept,
/// since they still mean something relative to whatever base the path is
/// later joined to. A relative path that collapses to nothing becomes `"."`,
/// and the empty string stays empty.
///
/// The result is a fixed point: `normalize(&normalize(p)) == normalize(p)`.
///
/// # Examples
///
/// ```
/// use sandpath::path::normalize::normalize;
///
/// assert_eq!(normalize("/a//b/./c/"), "/a/b/c");
/// assert_eq!(normalize("/a/b/../c"), "/a/c");
/// assert_eq!(normalize("/../.."), "/");
/// assert_eq!(normalize("../x/./y/.."), "../x");
/// assert_eq!(normalize("a/.."), ".");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            name => segments.push(name),
        }
    }

    let joined = segments.join("/");
    if absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Join `relative` onto `base` and normalize the result.
///
/// # Examples
///
/// ```
/// use sandpath::path::normalize::join_normalized;
/// use std::path::Path;
///
/// assert_eq!(join_normalized(Path::new("/work/project"), "../notes.txt"), "/work/notes.txt");
/// assert_eq!(join_normalized(Path::new("/work"), "."), "/work");
/// ```
#[must_use]
pub fn join_normalized(base: &Path, relative: &str) -> String {
    let base = base.to_string_lossy();
    if relative.is_empty() {
        return normalize(&base);
    }
    normalize(&format!("{base}/{relative}"))
}

/// Normalize `relative` as a path below an unnamed root.
///
/// `..` segments that would climb above the root are dropped, so joining the
/// result onto any directory never leaves that directory. The result has no
/// leading separator and is empty for the root itself.
///
/// # Examples
///
/// ```
/// use sandpath::path::normalize::confine;
///
/// assert_eq!(confine("a/./b/../c"), "a/c");
/// assert_eq!(confine("../../etc/passwd"), "etc/passwd");
/// assert_eq!(confine("x/../.."), "");
/// assert_eq!(confine(""), "");
/// ```
#[must_use]
pub fn confine(relative: &str) -> String {
    let rooted = normalize(&format!("/{relative}"));
    rooted.trim_start_matches('/').to_string()
}

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
/// Input that does not start with `~` is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::UnresolvableRelativePath`] if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use sandpath::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~ to home directory
/// let expanded = expand_tilde("~").unwrap();
/// assert!(expanded.is_absolute());
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde("~/project").unwrap();
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// assert_eq!(expand_tilde("notes/a.txt").unwrap(), Path::new("notes/a.txt"));
///
/// assert!(expand_tilde("~someone/file").is_err());
/// ```
pub fn expand_tilde(input: &str) -> Result<PathBuf> {
    if !input.starts_with('~') {
        return Ok(PathBuf::from(input));
    }

    let rest = if input == "~" {
        ""
    } else if let Some(rest) = input.strip_prefix("~/") {
        rest
    } else {
        return Err(Error::UnresolvableRelativePath {
            input: input.to_string(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        });
    };

    let home = home::home_dir().ok_or_else(|| Error::UnresolvableRelativePath {
        input: input.to_string(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}

/// Whether `path` is already in normal form.
#[must_use]
pub fn is_normalized(path: &str) -> bool {
    normalize(path) == path
}
