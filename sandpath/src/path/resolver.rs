//! The path resolution engine.
//!
//! This module provides the [`PathResolver`] type, which is the main
//! interface for turning arbitrary input strings into absolute, canonical
//! filesystem paths.

use std::io;
use std::path::{Path, PathBuf};

use crate::bundle::{BundleLookup, DirectoryBundle};
use crate::config::Config;
use crate::error::{Error, ErrorInfo, Result};
use crate::path::classify::{self, Anchor, Classification};
use crate::path::normalize::{self, join_normalized};
use crate::path::symlink::{self, DEFAULT_MAX_SYMLINK_HOPS};
use crate::path::types::{PathType, ResolutionResult};
use crate::probe::{AccessMode, EntryKind, FsProbe, SystemProbe};
use crate::sandbox::{SandboxDirectory, SandboxLayout, SandboxRoots};

/// Resolves input strings to canonical filesystem paths.
///
/// The resolver holds no mutable state. Sandbox roots are asked for on every
/// call and nothing is cached, so one instance can be shared freely across
/// threads (it is `Send + Sync` whenever its collaborators are).
///
/// The three collaborators are:
/// - `R`: where the sandbox directories and the bundle live
/// - `F`: the filesystem
/// - `B`: bundle resource lookup
///
/// # Examples
///
/// ```
/// use sandpath::probe::MockFileSystem;
/// use sandpath::{DirectoryBundle, PathResolver, PathType, SandboxLayout};
/// use std::path::Path;
///
/// let roots = SandboxLayout::with_container(Path::new("/c"), Path::new("/b/App.app"));
/// let fs = MockFileSystem::new().with_file("/c/Documents/report.pdf");
/// let resolver = PathResolver::new(roots, fs, DirectoryBundle::new());
///
/// let result = resolver.resolve_path_info("Documents/report.pdf");
/// assert_eq!(result.path_type, PathType::Documents);
/// assert_eq!(result.resolved_path.as_deref(), Some("/c/Documents/report.pdf"));
/// assert_eq!(result.canonical_path.as_deref(), Some("/c/Documents/report.pdf"));
/// assert!(result.exists);
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver<R = SandboxLayout, F = SystemProbe, B = DirectoryBundle> {
    roots: R,
    probe: F,
    bundle: B,
    /// Maximum number of link hops followed before giving up.
    max_symlink_hops: usize,
}

impl PathResolver {
    /// Create a resolver for the real filesystem from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the sandbox layout cannot be built from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::{Config, PathResolver};
    ///
    /// let config = Config {
    ///     container: Some(std::env::temp_dir()),
    ///     bundle: Some(std::env::temp_dir()),
    ///     max_symlink_hops: Some(8),
    ///     ..Default::default()
    /// };
    /// let resolver = PathResolver::from_config(&config).unwrap();
    /// assert_eq!(resolver.max_symlink_hops(), 8);
    /// ```
    pub fn from_config(config: &Config) -> Result<Self> {
        let roots = SandboxLayout::from_config(config)?;
        let bundle = DirectoryBundle::new().with_localizations(config.localizations());
        Ok(Self::new(roots, SystemProbe, bundle).with_max_symlink_hops(config.max_symlink_hops()))
    }
}

impl<R, F, B> PathResolver<R, F, B>
where
    R: SandboxRoots,
    F: FsProbe,
    B: BundleLookup,
{
    /// Create a resolver from its collaborators.
    #[must_use]
    pub fn new(roots: R, probe: F, bundle: B) -> Self {
        Self {
            roots,
            probe,
            bundle,
            max_symlink_hops: DEFAULT_MAX_SYMLINK_HOPS,
        }
    }

    /// Configure the maximum number of symbolic link hops.
    ///
    /// # Examples
    ///
    /// ```
    /// use sandpath::probe::MockFileSystem;
    /// use sandpath::{DirectoryBundle, PathResolver, SandboxLayout};
    /// use std::path::Path;
    ///
    /// let roots = SandboxLayout::with_container(Path::new("/c"), Path::new("/b"));
    /// let resolver = PathResolver::new(roots, MockFileSystem::new(), DirectoryBundle::new())
    ///     .with_max_symlink_hops(4);
    /// assert_eq!(resolver.max_symlink_hops(), 4);
    /// ```
    #[must_use]
    pub fn with_max_symlink_hops(mut self, hops: usize) -> Self {
        self.max_symlink_hops = hops;
        self
    }

    /// The configured hop limit.
    #[must_use]
    pub fn max_symlink_hops(&self) -> usize {
        self.max_symlink_hops
    }

    /// The sandbox roots provider.
    #[must_use]
    pub fn roots(&self) -> &R {
        &self.roots
    }

    /// The filesystem probe.
    #[must_use]
    pub fn probe(&self) -> &F {
        &self.probe
    }

    /// Classify `input` without touching the filesystem.
    #[must_use]
    pub fn detect_path_type(&self, input: &str) -> PathType {
        classify::classify(input, &self.roots).path_type
    }

    /// Resolve `input` and describe what is there.
    ///
    /// Never fails: problems are reported in [`ResolutionResult::error`].
    /// A missing entry is not an error; it yields `exists == false`.
    pub fn resolve_path_info(&self, input: &str) -> ResolutionResult {
        let classification = classify::classify(input, &self.roots);
        log::debug!("classified {input:?} as {}", classification.path_type);

        let mut result = ResolutionResult::new(classification.path_type, input);

        if classification.path_type == PathType::NetworkUrl {
            result.resolved_path = Some(input.to_string());
            return result;
        }

        let candidate = match self.candidate_for(input, &classification) {
            Ok(candidate) => candidate,
            Err(err) => {
                log::debug!("cannot resolve {input:?}: {err}");
                result.error = Some(ErrorInfo::from(&err));
                return result;
            }
        };
        result.resolved_path = Some(candidate.clone());

        if let Err(err) = self.probe_entry(&candidate, &mut result) {
            log::debug!("probe of {candidate} failed: {err}");
            result.canonical_path = None;
            result.error = Some(ErrorInfo::from(&err));
        }

        log::trace!(
            "{input:?} -> resolved={:?} canonical={:?} exists={}",
            result.resolved_path,
            result.canonical_path,
            result.exists
        );
        result
    }

    /// Resolve `input` to a single path.
    ///
    /// Returns the canonical path when there is one, else the resolved path
    /// if resolution raised no error.
    #[must_use]
    pub fn resolve_path(&self, input: &str) -> Option<String> {
        self.resolve_path_info(input).best_path().map(str::to_string)
    }

    /// Resolve every input independently.
    ///
    /// One failing input never affects the others.
    pub fn resolve_all<I, S>(&self, inputs: I) -> Vec<ResolutionResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|input| self.resolve_path_info(input.as_ref()))
            .collect()
    }

    /// Normalize `input` lexically. See [`normalize::normalize`].
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn normalize_path(&self, input: &str) -> String {
        normalize::normalize(input)
    }

    /// Follow the link chain starting at `input`.
    ///
    /// `input` may take any form the resolver accepts. Returns `Ok(None)` if
    /// the entry does not exist or is not a symbolic link.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be mapped to a filesystem path,
    /// the chain loops or exceeds the hop limit, or a probe fails.
    pub fn resolve_symbolic_link(&self, input: &str) -> Result<Option<String>> {
        let classification = classify::classify(input, &self.roots);
        if classification.path_type == PathType::NetworkUrl {
            return Ok(None);
        }
        let candidate = self.candidate_for(input, &classification)?;
        symlink::resolve_link_chain(&self.probe, &candidate, self.max_symlink_hops)
    }

    /// Look up a resource by name in a bundle.
    ///
    /// `bundle_path` defaults to the main bundle. A leading `.` on the
    /// extension is ignored and an empty extension counts as none. Returns
    /// `None` when nothing matches.
    #[must_use]
    pub fn resolve_resource_path(
        &self,
        name: &str,
        extension: Option<&str>,
        bundle_path: Option<&Path>,
    ) -> Option<String> {
        let extension = clean_extension(extension);
        let bundle_root = self.bundle_root(bundle_path);
        let found = self.bundle.find_resource(name, extension, &bundle_root);
        log::debug!(
            "resource {name:?} (ext {extension:?}) in {}: {found:?}",
            bundle_root.display()
        );
        found.map(|path| path.to_string_lossy().into_owned())
    }

    /// Like [`resolve_resource_path`](Self::resolve_resource_path), but a
    /// missing resource is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] when nothing matches.
    pub fn resolve_resource_strict(
        &self,
        name: &str,
        extension: Option<&str>,
        bundle_path: Option<&Path>,
    ) -> Result<String> {
        self.resolve_resource_path(name, extension, bundle_path)
            .ok_or_else(|| Error::ResourceNotFound {
                name: match clean_extension(extension) {
                    Some(ext) => format!("{name}.{ext}"),
                    None => name.to_string(),
                },
                bundle: self.bundle_root(bundle_path),
            })
    }

    /// The current root of `directory`, as a string.
    #[must_use]
    pub fn sandbox_path(&self, directory: SandboxDirectory) -> String {
        self.roots
            .root_for(directory)
            .to_string_lossy()
            .into_owned()
    }

    /// The Documents root.
    #[must_use]
    pub fn documents_path(&self) -> String {
        self.sandbox_path(SandboxDirectory::Documents)
    }

    /// The Library root.
    #[must_use]
    pub fn library_path(&self) -> String {
        self.sandbox_path(SandboxDirectory::Library)
    }

    /// The Cache root.
    #[must_use]
    pub fn cache_path(&self) -> String {
        self.sandbox_path(SandboxDirectory::Cache)
    }

    /// The temporary directory root.
    #[must_use]
    pub fn tmp_path(&self) -> String {
        self.sandbox_path(SandboxDirectory::Tmp)
    }

    /// The Application Support root.
    #[must_use]
    pub fn application_support_path(&self) -> String {
        self.sandbox_path(SandboxDirectory::ApplicationSupport)
    }

    /// The main bundle root.
    #[must_use]
    pub fn bundle_path(&self) -> String {
        self.sandbox_path(SandboxDirectory::Bundle)
    }

    /// A human-readable label for `path_type`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn path_type_description(&self, path_type: PathType) -> &'static str {
        path_type.description()
    }

    /// Map a classified input to an absolute, normalized location.
    fn candidate_for(&self, input: &str, classification: &Classification) -> Result<String> {
        match (&classification.anchor, classification.path_type) {
            (_, PathType::Unknown | PathType::NetworkUrl) => Err(Error::UnrecognizedPathFormat {
                input: input.to_string(),
            }),
            (_, PathType::FileUrl) => {
                let path = classify::file_url_path(input)?;
                Ok(normalize::normalize(&path))
            }
            (
                Some(Anchor::Alias {
                    directory: SandboxDirectory::Bundle,
                    remainder,
                }),
                _,
            ) => Ok(self.bundle_candidate(remainder)),
            (Some(Anchor::Alias { directory, remainder }), _) => {
                Ok(join_normalized(&self.roots.root_for(*directory), remainder))
            }
            (_, PathType::Relative) => self.anchor_relative(input),
            _ => Ok(normalize::normalize(input)),
        }
    }

    /// `Bundle/<name>`: a named resource, or the bundle root itself.
    fn bundle_candidate(&self, remainder: &str) -> String {
        let root = self.roots.root_for(SandboxDirectory::Bundle);
        if !normalize::normalize(remainder).trim_matches('.').is_empty() {
            if let Some(found) = self.bundle.find_resource(remainder, None, &root) {
                return normalize::normalize(&found.to_string_lossy());
            }
        }
        join_normalized(&root, remainder)
    }

    fn anchor_relative(&self, input: &str) -> Result<String> {
        if input.starts_with('~') {
            let expanded = normalize::expand_tilde(input)?;
            return Ok(normalize::normalize(&expanded.to_string_lossy()));
        }

        let cwd = self
            .probe
            .current_dir()
            .map_err(|e| Error::UnresolvableRelativePath {
                input: input.to_string(),
                reason: format!("Cannot get current directory: {e}"),
            })?;
        Ok(join_normalized(&cwd, input))
    }

    /// Fill in existence, type, access and canonical path for `candidate`.
    fn probe_entry(&self, candidate: &str, result: &mut ResolutionResult) -> Result<()> {
        let path = Path::new(candidate);

        let kind = match self.probe.lstat(path) {
            Ok(kind) => kind,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(Error::from_probe(path, e)),
        };
        result.exists = true;

        if kind != EntryKind::Symlink {
            result.is_directory = kind == EntryKind::Directory;
            self.probe_access(path, result)?;
            result.canonical_path = Some(candidate.to_string());
            return Ok(());
        }

        result.path_type = PathType::SymbolicLink;
        let target = symlink::resolve_link_chain(&self.probe, candidate, self.max_symlink_hops)?;

        let target_kind = match self.probe.stat(path) {
            Ok(kind) => kind,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{candidate} is a dangling link to {target:?}");
                return Ok(());
            }
            Err(e) => return Err(Error::from_probe(path, e)),
        };
        result.is_directory = target_kind == EntryKind::Directory;
        self.probe_access(path, result)?;
        result.canonical_path = target;
        Ok(())
    }

    fn probe_access(&self, path: &Path, result: &mut ResolutionResult) -> Result<()> {
        result.is_readable = self.check_access(path, AccessMode::Read)?;
        result.is_writable = self.check_access(path, AccessMode::Write)?;
        Ok(())
    }

    fn check_access(&self, path: &Path, mode: AccessMode) -> Result<bool> {
        match self.probe.access(path, mode) {
            Ok(allowed) => Ok(allowed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::from_probe(path, e)),
        }
    }

    fn bundle_root(&self, bundle_path: Option<&Path>) -> PathBuf {
        bundle_path.map_or_else(
            || self.roots.root_for(SandboxDirectory::Bundle),
            Path::to_path_buf,
        )
    }
}

fn clean_extension(extension: Option<&str>) -> Option<&str> {
    extension
        .map(|ext| ext.strip_prefix('.').unwrap_or(ext))
        .filter(|ext| !ext.is_empty())
}
