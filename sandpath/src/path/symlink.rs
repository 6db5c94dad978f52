//! Symbolic link chain resolution.
//!
//! Links are followed one hop at a time through an [`FsProbe`], with loop
//! detection and a hop limit, so a hostile or corrupted tree can never make
//! resolution hang.

use std::collections::HashSet;
use std::io;
use std::path::{Component, Path};

use crate::error::{Error, Result};
use crate::path::normalize::{join_normalized, normalize};
use crate::probe::{EntryKind, FsProbe};

/// Default number of link hops followed before giving up.
pub const DEFAULT_MAX_SYMLINK_HOPS: usize = 32;

/// Follow the link chain starting at `path`.
///
/// `path` should be absolute and normalized. Returns `Ok(None)` when `path`
/// does not exist or is not a symbolic link. Otherwise returns the first
/// entry in the chain that is not itself a link. That entry may not exist
/// (a dangling link still has a target).
///
/// Relative link targets are resolved against the directory containing the
/// link. Each hop's directory is resolved on disk through
/// [`FsProbe::canonicalize`], so a `..` in a target climbs out of the real
/// directory rather than out of a linked alias of it. Where that directory
/// does not exist the hop is normalized lexically.
///
/// # Errors
///
/// Returns an error if:
/// - The chain revisits an entry (`SymlinkCycle`)
/// - More than `max_hops` links would be followed (`SymlinkDepthExceeded`)
/// - A probe fails for any reason other than "not found"
///
/// # Examples
///
/// ```
/// use sandpath::path::symlink::resolve_link_chain;
/// use sandpath::probe::MockFileSystem;
///
/// let fs = MockFileSystem::new()
///     .with_file("/data/real.txt")
///     .with_symlink("/data/alias.txt", "real.txt")
///     .with_symlink("/top", "/data/alias.txt");
///
/// let target = resolve_link_chain(&fs, "/top", 32).unwrap();
/// assert_eq!(target.as_deref(), Some("/data/real.txt"));
///
/// assert_eq!(resolve_link_chain(&fs, "/data/real.txt", 32).unwrap(), None);
/// assert_eq!(resolve_link_chain(&fs, "/missing", 32).unwrap(), None);
/// ```
pub fn resolve_link_chain<F>(probe: &F, path: &str, max_hops: usize) -> Result<Option<String>>
where
    F: FsProbe + ?Sized,
{
    match lstat_kind(probe, path)? {
        Some(EntryKind::Symlink) => {}
        _ => return Ok(None),
    }

    let mut visited = HashSet::new();
    let mut current = path.to_string();
    let mut hops = 0;

    loop {
        if !visited.insert(current.clone()) {
            return Err(Error::SymlinkCycle {
                path: current.into(),
            });
        }

        if hops >= max_hops {
            return Err(Error::SymlinkDepthExceeded {
                path: path.into(),
                max_hops,
            });
        }

        let target = probe
            .read_link(Path::new(&current))
            .map_err(|e| Error::from_probe(Path::new(&current), e))?;
        hops += 1;

        let next = link_destination(probe, &current, &target)?;
        log::trace!("link hop {hops}: {current} -> {next}");

        match lstat_kind(probe, &next)? {
            Some(EntryKind::Symlink) => current = next,
            _ => return Ok(Some(next)),
        }
    }
}

/// The entry kind at `path`, or `None` if nothing is there.
fn lstat_kind<F>(probe: &F, path: &str) -> Result<Option<EntryKind>>
where
    F: FsProbe + ?Sized,
{
    match probe.lstat(Path::new(path)) {
        Ok(kind) => Ok(Some(kind)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::from_probe(Path::new(path), e)),
    }
}

/// Where a link at `link` pointing to `target` leads.
fn link_destination<F>(probe: &F, link: &str, target: &Path) -> Result<String>
where
    F: FsProbe + ?Sized,
{
    let link_dir = Path::new(link).parent().unwrap_or_else(|| Path::new("/"));
    let raw = link_dir.join(target);

    let (dir, name) = match raw.components().next_back() {
        Some(Component::Normal(name)) => {
            let dir = raw.parent().unwrap_or_else(|| Path::new("/"));
            (dir, Some(name))
        }
        _ => (raw.as_path(), None),
    };

    let real_dir = match probe.canonicalize(dir) {
        Ok(real) => real,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
            return Err(Error::from_probe(dir, e));
        }
        Err(e) => {
            log::trace!("{} not on disk ({e}); normalizing hop lexically", dir.display());
            return Ok(normalize(&raw.to_string_lossy()));
        }
    };

    Ok(match name {
        Some(name) => join_normalized(&real_dir, &name.to_string_lossy()),
        None => normalize(&real_dir.to_string_lossy()),
    })
}
