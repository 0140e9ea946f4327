//! End-to-end tests for CLI exit codes.
//!
//! These tests verify that the CLI returns the correct exit codes:
//!
//! - Exit code 0: Success (including `--help` and `--version`)
//! - Exit code 1: Unresolved source/destination repo, malformed config
//! - Exit code 2: Invalid command-line usage (handled by clap)
//!
//! A run with an unresolved repository locator must fail before any side
//! effect, so these tests also assert that no build directory is created.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Exit code 0 is returned for --help.
#[test]
fn test_exit_code_help() {
    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.arg("--help").assert().code(0);
}

/// Exit code 0 is returned for --version.
#[test]
fn test_exit_code_version() {
    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.arg("--version").assert().code(0);
}

/// Exit code 1 is returned when no source repo can be resolved.
#[test]
fn test_exit_code_missing_source_repo() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The source repo is not given."));
}

/// Exit code 1 is returned when only the source repo is given.
#[test]
fn test_exit_code_missing_destination_repo() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.current_dir(temp.path())
        .arg("--src")
        .arg("https://host/org/blog.git")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "The destination repo is not given.",
        ));
}

/// The missing-repo usage message is printed alongside the clap help text.
#[test]
fn test_missing_repo_prints_usage() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

/// An unresolved repo terminates the run before any filesystem side effect.
#[test]
fn test_missing_repo_creates_no_build_dir() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.current_dir(temp.path()).assert().code(1);

    assert!(
        !temp.path().join("temp").exists(),
        "no temp root may be created before config validation"
    );
}

/// Exit code 2 is returned for unknown command-line flags (handled by clap).
#[test]
fn test_exit_code_usage_unknown_flag() {
    let mut cmd = cargo_bin_cmd!("svs-blog-uploader");

    cmd.arg("--unknown-flag-that-does-not-exist")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error:"));
}
