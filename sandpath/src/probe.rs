//! Filesystem probing.
//!
//! The resolver never touches the filesystem directly. Every `lstat`, `stat`,
//! access check, link read and realpath goes through an [`FsProbe`], so
//! resolution can run against the real filesystem ([`SystemProbe`]) or an
//! in-memory tree ([`MockFileSystem`]) in tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// What kind of entry a path names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link (only reported by [`FsProbe::lstat`]).
    Symlink,
    /// Sockets, devices, fifos.
    Other,
}

impl From<fs::FileType> for EntryKind {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// Access being checked by [`FsProbe::access`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Permission to read.
    Read,
    /// Permission to write.
    Write,
}

/// Trait for the filesystem primitives the resolver needs.
///
/// Every method reports a missing entry as an error of kind
/// [`io::ErrorKind::NotFound`]; callers treat that as a normal outcome.
pub trait FsProbe: Send + Sync {
    /// Describe `path` without following a final symbolic link.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, `NotFound` when nothing is there.
    fn lstat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Describe `path`, following symbolic links.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, `NotFound` when the path or a link
    /// target is missing.
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;

    /// Whether the calling process may access `path` in `mode`.
    ///
    /// A plain refusal is `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the check itself fails.
    fn access(&self, path: &Path, mode: AccessMode) -> io::Result<bool>;

    /// Read the target of the symbolic link at `path`, verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is missing or is not a link.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// The absolute, symlink-free path of an existing entry (`realpath`).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when any component is missing, or the underlying
    /// error when a component cannot be resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// The base directory for relative inputs.
    ///
    /// # Errors
    ///
    /// Returns an error when the process has no usable working directory.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// Production probe backed by `std::fs`.
///
/// # Examples
///
/// ```
/// use sandpath::probe::{EntryKind, FsProbe, SystemProbe};
///
/// let probe = SystemProbe;
/// let dir = std::env::temp_dir();
/// assert_eq!(probe.stat(&dir).unwrap(), EntryKind::Directory);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl FsProbe for SystemProbe {
    fn lstat(&self, path: &Path) -> io::Result<EntryKind> {
        fs::symlink_metadata(path).map(|meta| meta.file_type().into())
    }

    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        fs::metadata(path).map(|meta| meta.file_type().into())
    }

    #[cfg(unix)]
    fn access(&self, path: &Path, mode: AccessMode) -> io::Result<bool> {
        use nix::errno::Errno;
        use nix::unistd::{access, AccessFlags};

        let flags = match mode {
            AccessMode::Read => AccessFlags::R_OK,
            AccessMode::Write => AccessFlags::W_OK,
        };
        match access(path, flags) {
            Ok(()) => Ok(true),
            Err(Errno::EACCES | Errno::EROFS | Errno::EPERM) => Ok(false),
            Err(errno) => Err(io::Error::from(errno)),
        }
    }

    #[cfg(not(unix))]
    fn access(&self, path: &Path, mode: AccessMode) -> io::Result<bool> {
        let meta = fs::metadata(path)?;
        Ok(match mode {
            AccessMode::Read => true,
            AccessMode::Write => !meta.permissions().readonly(),
        })
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Link hops the mock follows while walking a path before giving up.
const MOCK_STAT_HOP_LIMIT: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
enum MockEntry {
    File,
    Directory,
    Symlink(PathBuf),
}

/// In-memory filesystem for tests.
///
/// Entries are looked up by exact path; intermediate components are not
/// dereferenced, except by [`FsProbe::canonicalize`]. Every probe call increments a counter so tests can assert
/// that an operation touched (or did not touch) the filesystem.
///
/// # Examples
///
/// ```
/// use sandpath::probe::{EntryKind, FsProbe, MockFileSystem};
/// use std::path::Path;
///
/// let fs = MockFileSystem::new()
///     .with_file("/c/Documents/a.txt")
///     .with_symlink("/c/link", "/c/Documents/a.txt");
///
/// assert_eq!(fs.lstat(Path::new("/c/link")).unwrap(), EntryKind::Symlink);
/// assert_eq!(fs.stat(Path::new("/c/link")).unwrap(), EntryKind::File);
/// assert_eq!(fs.lstat(Path::new("/c/Documents")).unwrap(), EntryKind::Directory);
/// assert_eq!(fs.probe_count(), 3);
/// ```
///
/// It lives only under `probe`:
///
/// ```compile_fail
/// use sandpath::MockFileSystem;
/// ```
#[derive(Debug, Default)]
pub struct MockFileSystem {
    entries: HashMap<PathBuf, MockEntry>,
    denied: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    cwd: Option<PathBuf>,
    calls: AtomicUsize,
}

impl MockFileSystem {
    /// Create an empty filesystem containing only `/`, with no working
    /// directory.
    #[must_use]
    pub fn new() -> Self {
        let mut fs = Self::default();
        fs.entries.insert(PathBuf::from("/"), MockEntry::Directory);
        fs
    }

    /// Add a regular file (and any missing parent directories).
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.entries.insert(path, MockEntry::File);
        self
    }

    /// Add a directory (and any missing parents).
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_parents(&path);
        self.entries.insert(path, MockEntry::Directory);
        self
    }

    /// Add a symbolic link at `link` whose stored target is `target`.
    ///
    /// `target` is kept verbatim, so relative targets stay relative.
    #[must_use]
    pub fn with_symlink(mut self, link: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        let link = link.into();
        self.add_parents(&link);
        self.entries.insert(link, MockEntry::Symlink(target.into()));
        self
    }

    /// Make every probe of `path` fail with `PermissionDenied`.
    #[must_use]
    pub fn with_denied(mut self, path: impl Into<PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }

    /// Make `path` fail read access checks.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Make `path` fail write access checks.
    #[must_use]
    pub fn with_read_only(mut self, path: impl Into<PathBuf>) -> Self {
        self.read_only.insert(path.into());
        self
    }

    /// Set the working directory reported to relative inputs.
    #[must_use]
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Number of probe calls made so far.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Directory);
        }
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn lookup(&self, path: &Path) -> io::Result<&MockEntry> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        self.entries.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such entry: {}", path.display()),
            )
        })
    }

    fn follow(&self, path: &Path) -> io::Result<(PathBuf, EntryKind)> {
        let real = self.real_path(path)?;
        let kind = match self.lookup(&real)? {
            MockEntry::File => EntryKind::File,
            MockEntry::Directory => EntryKind::Directory,
            MockEntry::Symlink(_) => return Err(too_many_links(path)),
        };
        Ok((real, kind))
    }

    /// Walk `path` one component at a time, splicing in link targets.
    fn real_path(&self, path: &Path) -> io::Result<PathBuf> {
        let mut pending: VecDeque<OsString> = VecDeque::new();
        push_components(&mut pending, path);

        let mut resolved = PathBuf::from("/");
        let mut hops = 0;
        while let Some(part) = pending.pop_front() {
            if part == ".." {
                resolved.pop();
                continue;
            }
            let next = resolved.join(&part);
            match self.lookup(&next)? {
                MockEntry::Symlink(target) => {
                    hops += 1;
                    if hops > MOCK_STAT_HOP_LIMIT {
                        return Err(too_many_links(path));
                    }
                    if target.is_absolute() {
                        resolved = PathBuf::from("/");
                    }
                    let mut spliced = VecDeque::new();
                    push_components(&mut spliced, target);
                    spliced.append(&mut pending);
                    pending = spliced;
                }
                _ => resolved = next,
            }
        }
        Ok(resolved)
    }
}

fn push_components(queue: &mut VecDeque<OsString>, path: &Path) {
    for component in path.components() {
        match component {
            Component::Normal(name) => queue.push_back(name.to_os_string()),
            Component::ParentDir => queue.push_back(OsString::from("..")),
            Component::RootDir | Component::CurDir | Component::Prefix(_) => {}
        }
    }
}

fn too_many_links(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links: {}", path.display()),
    )
}

impl FsProbe for MockFileSystem {
    fn lstat(&self, path: &Path) -> io::Result<EntryKind> {
        self.record();
        Ok(match self.lookup(path)? {
            MockEntry::File => EntryKind::File,
            MockEntry::Directory => EntryKind::Directory,
            MockEntry::Symlink(_) => EntryKind::Symlink,
        })
    }

    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        self.record();
        self.follow(path).map(|(_, kind)| kind)
    }

    fn access(&self, path: &Path, mode: AccessMode) -> io::Result<bool> {
        self.record();
        let (target, _) = self.follow(path)?;
        Ok(match mode {
            AccessMode::Read => !self.unreadable.contains(&target),
            AccessMode::Write => !self.read_only.contains(&target),
        })
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        self.record();
        match self.lookup(path)? {
            MockEntry::Symlink(target) => Ok(target.clone()),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a symbolic link: {}", path.display()),
            )),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.record();
        self.real_path(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.record();
        self.cwd.clone().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no working directory configured")
        })
    }
}
