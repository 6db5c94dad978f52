//! Bundle resource lookup.
//!
//! Bundle resources are addressed by name and extension rather than by raw
//! path. A [`BundleLookup`] turns such a reference into a concrete file inside
//! a bundle root, or reports that nothing matches.

use std::path::{Component, Path, PathBuf};

/// Localization directories searched when none are configured.
pub const DEFAULT_LOCALIZATIONS: &[&str] = &["Base"];

/// Trait for locating named resources inside a bundle.
pub trait BundleLookup: Send + Sync {
    /// Find `name` (with `extension` appended when given) inside
    /// `bundle_root`.
    ///
    /// Returns `None` when no such resource exists. A missing resource is a
    /// normal outcome, not an error.
    fn find_resource(
        &self,
        name: &str,
        extension: Option<&str>,
        bundle_root: &Path,
    ) -> Option<PathBuf>;
}

/// Looks resources up in an on-disk bundle directory.
///
/// Search order: the bundle root, its `Resources/` directory, then one
/// `<lang>.lproj/` directory per configured localization.
///
/// # Examples
///
/// ```
/// use sandpath::{BundleLookup, DirectoryBundle};
///
/// let bundle = tempfile::tempdir().unwrap();
/// std::fs::create_dir(bundle.path().join("Resources")).unwrap();
/// std::fs::write(bundle.path().join("Resources/icon.png"), b"png").unwrap();
///
/// let lookup = DirectoryBundle::new();
/// let found = lookup.find_resource("icon", Some("png"), bundle.path()).unwrap();
/// assert!(found.ends_with("Resources/icon.png"));
/// assert!(lookup.find_resource("icon", Some("jpg"), bundle.path()).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryBundle {
    localizations: Vec<String>,
}

impl Default for DirectoryBundle {
    fn default() -> Self {
        Self {
            localizations: DEFAULT_LOCALIZATIONS
                .iter()
                .map(|lang| (*lang).to_string())
                .collect(),
        }
    }
}

impl DirectoryBundle {
    /// Create a lookup that searches the default localizations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the localization directories that are searched.
    #[must_use]
    pub fn with_localizations(mut self, localizations: Vec<String>) -> Self {
        self.localizations = localizations;
        self
    }

    /// The localizations searched after the bundle root and `Resources/`.
    #[must_use]
    pub fn localizations(&self) -> &[String] {
        &self.localizations
    }

    fn search_dirs(&self, bundle_root: &Path) -> Vec<PathBuf> {
        let mut dirs = vec![bundle_root.to_path_buf(), bundle_root.join("Resources")];
        dirs.extend(
            self.localizations
                .iter()
                .map(|lang| bundle_root.join(format!("{lang}.lproj"))),
        );
        dirs
    }
}

impl BundleLookup for DirectoryBundle {
    fn find_resource(
        &self,
        name: &str,
        extension: Option<&str>,
        bundle_root: &Path,
    ) -> Option<PathBuf> {
        let file_name = resource_file_name(name, extension)?;
        self.search_dirs(bundle_root)
            .into_iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.symlink_metadata().is_ok())
    }
}

/// Build `name[.extension]`, refusing names that would escape the bundle.
fn resource_file_name(name: &str, extension: Option<&str>) -> Option<String> {
    let escapes = Path::new(name)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if name.is_empty() || escapes {
        return None;
    }
    Some(match extension {
        Some(ext) => format!("{name}.{ext}"),
        None => name.to_string(),
    })
}
