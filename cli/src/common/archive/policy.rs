//! # Path and Mode Policy (`common::archive::policy`)
//!
//! File: cli/src/common/archive/policy.rs
//!
//! ## Overview
//!
//! Computes the two pieces of metadata the archive writer decides on its own: the
//! internal path of each entry and the permission bits stored in its header.
//!
//! - Internal paths are joined with `/` on every platform. Empty and `.` segments are
//!   dropped and repeated slashes collapse. `..` is kept as written; callers are trusted
//!   to supply sane prefixes.
//! - Stored modes contain permission bits only (`0o7777`). The entry type travels
//!   separately in the header.
//!
use std::fs::Metadata;
use std::path::{Component, Path};

/// Executable bit for owner, group and other.
pub const EXECUTABLE_ALL: u32 = 0o111;
/// Read and write for owner, group and other.
pub const READ_WRITE_ALL: u32 = 0o666;
/// Permission, setuid/setgid and sticky bits.
pub const PERMISSION_MASK: u32 = 0o7777;

/// Joins an archive prefix and a name with forward slashes.
///
/// ```rust,ignore
/// assert_eq!(join_internal("pkg/", "bin/tool"), "pkg/bin/tool");
/// assert_eq!(join_internal("", "f.txt"), "f.txt");
/// assert_eq!(join_internal("pkg", "."), "pkg");
/// ```
pub fn join_internal(prefix: &str, name: &str) -> String {
    let absolute = [prefix, name]
        .iter()
        .find(|part| !part.is_empty())
        .is_some_and(|part| part.starts_with('/'));

    let segments: Vec<&str> = prefix
        .split('/')
        .chain(name.split('/'))
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    let joined = segments.join("/");
    if absolute {
        format!("/{}", joined)
    } else {
        joined
    }
}

/// Last component of `path` as archive text.
///
/// `.` and `..` are returned as written and the filesystem root yields `/`, so that
/// joining behaves like a plain string join for those inputs.
pub fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir) => "/".to_string(),
        Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().into_owned(),
        None => String::new(),
    }
}

/// Mode stored for a file read from disk.
pub fn disk_mode(source_mode: u32, force_executable: bool) -> u32 {
    let mode = source_mode & PERMISSION_MASK;
    if force_executable {
        mode | EXECUTABLE_ALL
    } else {
        mode
    }
}

/// Mode stored for synthesized content.
pub fn synthesized_mode(force_executable: bool) -> u32 {
    if force_executable {
        READ_WRITE_ALL | EXECUTABLE_ALL
    } else {
        READ_WRITE_ALL
    }
}

/// Permission bits of a stat result.
#[cfg(unix)]
pub fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & PERMISSION_MASK
}

/// Permission bits of a stat result, approximated from the read-only flag.
#[cfg(not(unix))]
pub fn permission_bits(metadata: &Metadata) -> u32 {
    match (metadata.is_dir(), metadata.permissions().readonly()) {
        (true, true) => 0o555,
        (true, false) => 0o755,
        (false, true) => 0o444,
        (false, false) => 0o644,
    }
}
