//! End-to-end tests for the pagesmith binary
//!
//! Covers the exit-code contract: 0 on success, 1 on fatal build errors
//! (with the three-line report on stderr), clap's own code for bad usage.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn pagesmith() -> Command {
    Command::cargo_bin("pagesmith").expect("binary should build")
}

#[test]
fn new_then_build_succeeds() {
    let temp = TempDir::new().unwrap();

    pagesmith()
        .args(["new", "."])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("New site installed"));

    pagesmith().arg("build").current_dir(temp.path()).assert().success();

    assert!(temp.path().join("_site").is_dir());
    assert!(temp.path().join("_posts").is_dir());
}

#[test]
fn build_reports_fatal_error_and_exits_1() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("_config.toml"), "source = \"no-such-dir\"\n").unwrap();

    pagesmith()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ERROR: YOUR SITE COULD NOT BE BUILT"))
        .stderr(predicate::str::contains("------------------------------------"))
        .stderr(predicate::str::contains("no-such-dir"));
}

#[test]
fn build_with_unreadable_config_exits_1_without_fatal_banner() {
    let temp = TempDir::new().unwrap();

    pagesmith()
        .args(["build", "--config", "missing.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config"))
        .stderr(predicate::str::contains("YOUR SITE COULD NOT BE BUILT").not());
}

#[test]
fn build_with_invalid_config_reports_parse_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("_config.toml"), "not toml {{{").unwrap();

    pagesmith()
        .arg("build")
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn build_quiet_suppresses_progress_output() {
    let temp = TempDir::new().unwrap();
    pagesmith().args(["new", "."]).current_dir(temp.path()).assert().success();

    pagesmith()
        .args(["build", "-q"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Site built").not());
}

#[test]
fn build_watch_reports_patterns_excluding_destination() {
    let temp = TempDir::new().unwrap();
    pagesmith().args(["new", "."]).current_dir(temp.path()).assert().success();

    pagesmith()
        .args(["build", "-w"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("_posts/**/*"))
        .stderr(predicate::str::contains("_site/**/*").not());
}

#[test]
fn new_refuses_non_empty_directory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("existing.txt"), "x").unwrap();

    pagesmith()
        .args(["new", "."])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not empty"));
}

#[test]
fn unknown_subcommand_is_usage_error() {
    pagesmith().arg("deploy").assert().failure().code(2);
}

#[test]
fn help_lists_registered_commands() {
    pagesmith()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("new"));
}
