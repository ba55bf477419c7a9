//! # tarpack CLI List Integration Tests
//!
//! File: cli/tests/list.rs
//!
//! ## Overview
//!
//! Packs a fixture tree and checks that `tarpack list` prints every entry.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_list_after_pack() {
    let temp = tempdir().unwrap();
    fixture_tree(temp.path());
    let config = temp.path().join("empty.toml");
    fs::write(&config, "").unwrap();

    tarpack_cmd(temp.path())
        .args(["pack", "-o", "out.tar", "app", "-p", "pkg", "--config"])
        .arg(&config)
        .assert()
        .success();

    tarpack_cmd(temp.path())
        .args(["list", "out.tar"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("pkg/bin/run.sh")
                .and(predicate::str::contains("pkg/readme.txt"))
                .and(predicate::str::is_match(r"(?m)^d\d{4} +0 .* pkg/logs$").unwrap()),
        );
}

#[test]
fn test_list_missing_archive_fails() {
    let temp = tempdir().unwrap();
    tarpack_cmd(temp.path())
        .args(["list", "missing.tar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open archive"));
}
