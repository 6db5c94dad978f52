//! Properties of classification, containment and resolution against an
//! in-memory filesystem. Normalization has its own properties in
//! `normalize`.

use super::classify::classify;
use super::normalize::normalize;
use super::relationship::{depth, PathRelationship};
use super::resolver::PathResolver;
use super::types::PathType;
use crate::bundle::DirectoryBundle;
use crate::probe::MockFileSystem;
use crate::sandbox::SandboxLayout;
use proptest::prelude::*;
use std::path::{Path, PathBuf};

fn layout() -> SandboxLayout {
    SandboxLayout::with_container(Path::new("/c"), Path::new("/b/App.app"))
}

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn alias_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("Documents"),
        Just("Library"),
        Just("Cache"),
        Just("Tmp"),
        Just("ApplicationSupport"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Classification is deterministic over arbitrary input
    #[test]
    fn classification_deterministic(input in any::<String>()) {
        let roots = layout();
        let first = classify(&input, &roots);
        let second = classify(&input, &roots);
        prop_assert_eq!(first, second);
    }

    // Classification never reports a symbolic link
    #[test]
    fn classification_never_symlink(input in any::<String>()) {
        prop_assert_ne!(classify(&input, &layout()).path_type, PathType::SymbolicLink);
    }

    // Whitespace-only input is always Unknown
    #[test]
    fn whitespace_is_unknown(input in "[ \t\r\n]{0,12}") {
        prop_assert_eq!(classify(&input, &layout()).path_type, PathType::Unknown);
    }

    // Alias inputs resolve beneath the current root, whatever `..` they carry
    #[test]
    fn alias_resolves_under_root(
        alias in alias_strategy(),
        parts in prop::collection::vec(
            prop_oneof![
                3 => path_component_strategy(),
                2 => Just("..".to_string()),
                1 => Just(".".to_string()),
            ],
            0..6,
        ),
    ) {
        let input = if parts.is_empty() {
            alias.to_string()
        } else {
            format!("{alias}/{}", parts.join("/"))
        };
        let resolver = PathResolver::new(layout(), MockFileSystem::new(), DirectoryBundle::new());
        let result = resolver.resolve_path_info(&input);

        let directory = crate::sandbox::SandboxDirectory::from_alias(alias).unwrap();
        let root = resolver.sandbox_path(directory);
        let resolved = result.resolved_path.unwrap();
        prop_assert!(PathRelationship::is_within(Path::new(&resolved), Path::new(&root)));
    }

    // Canonical paths are fixed points of normalize
    #[test]
    fn canonical_path_is_normalized(path in absolute_path_strategy(), noise in "(/\\.|//|/x/\\.\\.){0,3}") {
        let clean = path.to_string_lossy().into_owned();
        let resolver = PathResolver::new(
            layout(),
            MockFileSystem::new().with_file(&clean),
            DirectoryBundle::new(),
        );

        let result = resolver.resolve_path_info(&format!("{clean}{noise}"));
        let canonical = result.canonical_path.unwrap();
        prop_assert_eq!(normalize(&canonical), canonical.clone());
        prop_assert_eq!(canonical, clean);
    }

    // Network URLs never touch the filesystem
    #[test]
    fn network_urls_are_not_probed(host in "[a-z]{1,10}", rest in "[a-z0-9/]{0,20}") {
        let resolver = PathResolver::new(layout(), MockFileSystem::new(), DirectoryBundle::new());
        let result = resolver.resolve_path_info(&format!("https://{host}.test/{rest}"));
        prop_assert_eq!(result.path_type, PathType::NetworkUrl);
        prop_assert!(!result.exists);
        prop_assert!(result.error.is_none());
        prop_assert_eq!(resolver.probe().probe_count(), 0);
    }

    // Every path is the same location as itself, trailing slash or not
    #[test]
    fn relationship_same_with_itself(path in absolute_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
        let slashed = format!("{}/", path.display());
        prop_assert_eq!(
            PathRelationship::between(Path::new(&slashed), &path),
            PathRelationship::Same
        );
    }

    // Swapping the operands swaps Ancestor and Descendant
    #[test]
    fn relationship_flips_when_swapped(a in absolute_path_strategy(), b in absolute_path_strategy()) {
        let forward = PathRelationship::between(&a, &b);
        let expected = match PathRelationship::between(&b, &a) {
            PathRelationship::Ancestor => PathRelationship::Descendant,
            PathRelationship::Descendant => PathRelationship::Ancestor,
            other => other,
        };
        prop_assert_eq!(forward, expected);
    }

    // Appending a component yields a child one level deeper
    #[test]
    fn child_lies_within_parent(parent in absolute_path_strategy(), name in path_component_strategy()) {
        let child = parent.join(&name);
        prop_assert!(PathRelationship::is_within(&child, &parent));
        prop_assert!(!PathRelationship::is_within(&parent, &child));
        prop_assert_eq!(depth(&child), depth(&parent) + 1);

        let sibling = PathBuf::from(format!("{}{name}", parent.display()));
        prop_assert!(!PathRelationship::is_within(&sibling, &parent));
    }
}
