//! CLI integration tests for the `mystic8` binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_flags() {
    Command::cargo_bin("mystic8")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--seed"))
        .stdout(predicate::str::contains("--fps"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn version_flag() {
    Command::cargo_bin("mystic8")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mystic8"));
}

#[test]
fn rejects_non_numeric_seed() {
    Command::cargo_bin("mystic8")
        .unwrap()
        .args(["--seed", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--seed"));
}

#[test]
fn unopenable_log_file_fails_before_terminal_setup() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("mystic8.log");
    Command::cargo_bin("mystic8")
        .unwrap()
        .arg("--log-file")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open log file"));
}
