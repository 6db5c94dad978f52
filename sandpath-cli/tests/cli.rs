//! Integration tests for the sandpath CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("sandpath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Classify and resolve sandboxed application paths",
        ));
}

/// Test that every command is listed in the help text.
#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    let output = cmd.arg("--help").output().expect("Failed to run sandpath");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8 in output");

    for command in [
        "resolve",
        "classify",
        "normalize",
        "readlink",
        "resource",
        "roots",
        "validate",
        "completions",
    ] {
        assert!(stdout.contains(command), "help is missing {command}");
    }
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

/// Test that `resolve` requires at least one path.
#[test]
fn test_resolve_requires_path() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    cmd.arg("resolve");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("<PATH>"));
}

// ============================================================================
// Completions
// ============================================================================

/// Test that bash completions are generated for the sandpath binary.
#[test]
fn test_completions_bash() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sandpath"))
        .stdout(predicate::str::contains("resolve"));
}

/// Test that an unknown shell is rejected.
#[test]
fn test_completions_unknown_shell() {
    let mut cmd = Command::cargo_bin("sandpath").expect("Failed to find sandpath binary");

    cmd.args(["completions", "tcsh"]).assert().failure();
}
