//! Command-line surface tests. None of these reach the terminal setup.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("polar-plotter").unwrap()
}

#[test]
fn help_lists_options() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("polar-area chart"))
        .stdout(predicate::str::contains("--log"))
        .stdout(predicate::str::contains("--tick-rate"))
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("--no-sweep"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("polar-plotter "));
}

#[test]
fn tick_rate_must_be_positive() {
    cmd()
        .args(["--tick-rate", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tick-rate"));
}

#[test]
fn unknown_theme_is_rejected() {
    cmd()
        .args(["--theme", "solarized"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dark").and(predicate::str::contains("light")));
}

#[test]
fn unwritable_log_path_fails_before_startup() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("missing").join("plotter.log");

    cmd()
        .arg("--log")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open log file"));

    assert!(!log.exists());
}
