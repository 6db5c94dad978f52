//! Containment between absolute paths.
//!
//! Roots are matched component by component, so `/c/Documents2` is not
//! inside `/c/Documents`. Trailing separators never change the answer.

use std::path::{Component, Path};

/// How one path sits relative to another.
///
/// # Examples
///
/// ```
/// use sandpath::path::PathRelationship;
/// use std::path::Path;
///
/// let root = Path::new("/container/Documents");
/// let file = Path::new("/container/Documents/notes.txt");
///
/// assert_eq!(
///     PathRelationship::between(root, file),
///     PathRelationship::Ancestor
/// );
/// assert_eq!(
///     PathRelationship::between(Path::new("/a/"), Path::new("/a")),
///     PathRelationship::Same
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// `first` strictly contains `second`.
    Ancestor,
    /// `second` strictly contains `first`.
    Descendant,
    /// Both name the same location.
    Same,
    /// Neither contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Compare `first` against `second`.
    #[must_use]
    pub fn between(first: &Path, second: &Path) -> Self {
        let a: Vec<Component<'_>> = first.components().collect();
        let b: Vec<Component<'_>> = second.components().collect();

        let shared = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
        match (shared == a.len(), shared == b.len()) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Whether `path` is `root` or lies beneath it.
    ///
    /// ```
    /// use sandpath::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let library = Path::new("/c/Library");
    /// assert!(PathRelationship::is_within(Path::new("/c/Library/Caches"), library));
    /// assert!(PathRelationship::is_within(library, library));
    /// assert!(!PathRelationship::is_within(Path::new("/c/Libraryx"), library));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, root: &Path) -> bool {
        matches!(Self::between(path, root), Self::Descendant | Self::Same)
    }

    /// Whether `root` is `path` or lies above it.
    #[must_use]
    pub fn contains(root: &Path, path: &Path) -> bool {
        Self::is_within(path, root)
    }

    /// Sentence describing where `first` sits relative to `second`, for
    /// trace logging.
    #[must_use]
    pub fn description(&self, first: &Path, second: &Path) -> String {
        let verb = match self {
            Self::Ancestor => "contains",
            Self::Descendant => "is inside",
            Self::Same => "is",
            Self::Unrelated => "is outside",
        };
        format!("{} {verb} {}", first.display(), second.display())
    }
}

/// Number of named components in `path`.
///
/// Nested roots are ranked by this: the deeper root is the more specific
/// match.
#[must_use]
pub fn depth(path: &Path) -> usize {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}
