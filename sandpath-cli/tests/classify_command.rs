//! Integration tests for the `classify` and `normalize` commands.

mod common;

use common::{display, TestEnv};
use predicates::prelude::*;

/// Test that each input form gets its type name.
#[test]
fn test_classify_input_forms() {
    let env = TestEnv::new();
    let inside_library = display(&env.in_container("Library/Preferences/app.plist"));

    let stdout = env.stdout_of(env.command().args([
        "classify",
        "Documents/a.txt",
        "Cache/img",
        &inside_library,
        "/etc/hosts",
        "file:///etc/hosts",
        "HTTPS://example.com",
        "notes.txt",
        "Bundle/Info.plist",
    ]));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Documents",
            "Cache",
            "Library",
            "Absolute",
            "FileURL",
            "NetworkURL",
            "Relative",
            "BundleResource",
        ]
    );
}

/// Test that --describe prints human-readable labels.
#[test]
fn test_classify_describe() {
    let env = TestEnv::new();

    env.command()
        .args(["classify", "--describe", "ApplicationSupport/db", "Tmp"])
        .assert()
        .success()
        .stdout("Application Support Directory\nTemporary Directory\n");
}

/// Test that classification never touches the filesystem.
#[test]
fn test_classify_does_not_require_existence() {
    let env = TestEnv::new();

    env.command()
        .args(["classify", "Documents/does/not/exist"])
        .assert()
        .success()
        .stdout("Documents\n");
}

/// Test that a sibling directory sharing a root's prefix is not inside it.
#[test]
fn test_classify_is_component_wise() {
    let env = TestEnv::new();
    let sibling = format!("{}2/file", display(&env.in_container("Documents")));

    env.command()
        .args(["classify", &sibling])
        .assert()
        .success()
        .stdout("Absolute\n");
}

// ============================================================================
// normalize
// ============================================================================

/// Test lexical normalization of absolute and relative paths.
#[test]
fn test_normalize_paths() {
    let env = TestEnv::new();

    env.command()
        .args([
            "normalize",
            "/a/./b/../c//d/",
            "/../x",
            "../a/b/..",
            "a/..",
        ])
        .assert()
        .success()
        .stdout("/a/c/d\n/x\n../a\n.\n");
}

/// Test that normalization needs no container configuration.
#[test]
fn test_normalize_without_configuration() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["normalize", "/tmp/./x"])
        .assert()
        .success()
        .stdout(predicate::eq("/tmp/x\n"));
}
