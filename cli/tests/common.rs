//! # tarpack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`: locating the compiled
//! binary, isolating it from user and project configuration, building fixture trees and
//! reading archives back.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// # Get tarpack Command (`tarpack_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `tarpack` binary, running in
/// `workdir` with the user configuration directory redirected into it, so that only
/// configuration created by the test is picked up.
///
/// ## Panics
/// Panics if the `tarpack` binary cannot be found via `Command::cargo_bin`.
pub fn tarpack_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tarpack").expect("Failed to find tarpack binary for testing");
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", workdir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Creates `root/app` containing `readme.txt`, `bin/run.sh` and an empty `logs` folder.
/// A `.git` directory in `root` stops the project configuration search.
pub fn fixture_tree(root: &Path) -> PathBuf {
    fs::create_dir_all(root.join(".git")).unwrap();
    let app = root.join("app");
    fs::create_dir_all(app.join("bin")).unwrap();
    fs::create_dir_all(app.join("logs")).unwrap();
    fs::write(app.join("readme.txt"), "read me").unwrap();
    fs::write(app.join("bin/run.sh"), "#!/bin/sh\necho hi\n").unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(app.join("readme.txt"), fs::Permissions::from_mode(0o644)).unwrap();
        fs::set_permissions(app.join("bin/run.sh"), fs::Permissions::from_mode(0o700)).unwrap();
    }
    app
}

/// One archive entry as `(path, is_dir, mode, size, mtime, body)`.
pub type ListedEntry = (String, bool, u32, u64, u64, String);

/// Reads every entry of a tar stream.
pub fn read_entries<R: io::Read>(input: R) -> io::Result<Vec<ListedEntry>> {
    let mut archive = tar::Archive::new(input);
    let mut entries = Vec::new();
    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = entry
            .path()?
            .to_string_lossy()
            .trim_end_matches('/')
            .to_string();
        let is_dir = entry.header().entry_type().is_dir();
        let mode = entry.header().mode()?;
        let size = entry.header().size()?;
        let mtime = entry.header().mtime()?;
        let mut body = String::new();
        io::Read::read_to_string(&mut entry, &mut body)?;
        entries.push((path, is_dir, mode, size, mtime, body));
    }
    Ok(entries)
}

/// Reads every entry of the archive file at `path`.
pub fn read_archive(path: &Path) -> Vec<ListedEntry> {
    read_entries(fs::File::open(path).expect("archive exists")).expect("archive is readable")
}

/// Entry paths of the archive file at `path`, in archive order.
pub fn archive_names(path: &Path) -> Vec<String> {
    read_archive(path).into_iter().map(|e| e.0).collect()
}
