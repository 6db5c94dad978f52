//! Integration tests for global options and configuration layering.

mod common;

use common::{display, TestEnv};
use predicates::prelude::*;

// ============================================================================
// Configuration files
// ============================================================================

/// Test that an explicit configuration file supplies the container.
#[test]
fn test_config_file_sets_container() {
    let env = TestEnv::new();
    let config = env.write_config(
        "sandpath.yaml",
        &format!(
            "container: {}\nbundle: {}\n",
            display(&env.container),
            display(&env.bundle)
        ),
    );

    env.command_bare()
        .arg("--config")
        .arg(&config)
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Documents: {}",
            display(&env.in_container("Documents"))
        )));
}

/// Test that the user configuration in ~/.sandpath is picked up.
#[test]
fn test_user_config_file() {
    let env = TestEnv::new();
    let tmp_root = env.create_dir("scratch");
    env.write_config(
        ".sandpath/config.yaml",
        &format!(
            "container: {}\nbundle: {}\nroots:\n  tmp: {}\n",
            display(&env.container),
            display(&env.bundle),
            display(&tmp_root)
        ),
    );

    env.command_bare()
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Tmp: {}", display(&tmp_root))));
}

/// Test that command-line options win over the configuration file.
#[test]
fn test_cli_overrides_config_file() {
    let env = TestEnv::new();
    let other = env.create_dir("other-container");
    let config = env.write_config(
        "sandpath.yaml",
        &format!(
            "container: {}\nbundle: {}\n",
            display(&other),
            display(&env.bundle)
        ),
    );

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Documents: {}",
            display(&env.in_container("Documents"))
        )));
}

/// Test that environment variables win over the configuration file.
#[test]
fn test_env_overrides_config_file() {
    let env = TestEnv::new();
    let other = env.create_dir("other-container");
    let config = env.write_config(
        "sandpath.yaml",
        &format!(
            "container: {}\nbundle: {}\n",
            display(&other),
            display(&env.bundle)
        ),
    );

    env.command_bare()
        .env("SANDPATH_CONTAINER", &env.container)
        .arg("--config")
        .arg(&config)
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Library: {}",
            display(&env.in_container("Library"))
        )));
}

/// Test that a missing explicit configuration file is a configuration error.
#[test]
fn test_missing_config_file() {
    let env = TestEnv::new();

    env.command()
        .arg("--config")
        .arg(env.path().join("absent.yaml"))
        .arg("roots")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

/// Test that unknown keys are rejected.
#[test]
fn test_config_unknown_key() {
    let env = TestEnv::new();
    let config = env.write_config("bad.yaml", "containr: /x\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("roots")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

/// Test that a relative root in configuration fails validation.
#[test]
fn test_config_relative_root() {
    let env = TestEnv::new();
    let config = env.write_config("bad.yaml", "roots:\n  documents: relative/docs\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .arg("roots")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("roots.documents"));
}

// ============================================================================
// Logging
// ============================================================================

/// Test that --verbose emits debug diagnostics on stderr.
#[test]
fn test_verbose_logs_to_stderr() {
    let env = TestEnv::new();

    env.command()
        .args(["--verbose", "classify", "Documents/a"])
        .assert()
        .success()
        .stdout("Documents\n")
        .stderr(predicate::str::contains("DEBUG"));
}

/// Test that --quiet suppresses warnings about failed inputs.
#[test]
fn test_quiet_suppresses_warnings() {
    let env = TestEnv::new();

    env.command()
        .args(["--quiet", "resolve", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WARN").not());
}

/// Test that failed inputs are warned about by default.
#[test]
fn test_default_warns_on_failure() {
    let env = TestEnv::new();

    env.command()
        .args(["resolve", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("WARN"));
}

// ============================================================================
// validate
// ============================================================================

/// Test that a valid configuration file passes.
#[test]
fn test_validate_valid_config() {
    let env = TestEnv::new();
    let config = env.write_config(
        "sandpath.yaml",
        "container: /var/mobile/app\nmax_symlink_hops: 8\nlocalizations: [Base, en]\n",
    );

    env.command_bare()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

/// Test that a zero hop limit fails validation.
#[test]
fn test_validate_zero_hops() {
    let env = TestEnv::new();
    let config = env.write_config("sandpath.yaml", "max_symlink_hops: 0\n");

    env.command_bare()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_symlink_hops"));
}

/// Test that a bad localization name fails validation.
#[test]
fn test_validate_bad_localization() {
    let env = TestEnv::new();
    let config = env.write_config("sandpath.yaml", "localizations: ['../etc']\n");

    env.command_bare()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

/// Test that unparseable YAML is reported.
#[test]
fn test_validate_parse_error() {
    let env = TestEnv::new();
    let config = env.write_config("sandpath.yaml", "container: [unclosed\n");

    env.command_bare()
        .arg("validate")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

/// Test that a missing file is an argument error.
#[test]
fn test_validate_missing_file() {
    let env = TestEnv::new();

    env.command_bare()
        .arg("validate")
        .arg(env.path().join("nope.yaml"))
        .assert()
        .code(4);
}
