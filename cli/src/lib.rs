//! # tarpack Library
//!
//! File: cli/src/lib.rs
//!
//! ## Overview
//!
//! tarpack builds deterministic, permission-controlled tar archives from directory
//! trees, individual files and generated content. The library exposes the archive
//! entry writer used by the `tarpack` binary so build scripts can drive it directly.
//!
//! ## Architecture
//!
//! - `common::archive`: `ArchiveEntryWriter`, path/mode policy, options, the
//!   `ArchiveSink` contract and its tar implementation.
//! - `common::fs`: Archive destination handling.
//! - `core::config`: Layered TOML configuration for the `pack` command.
//! - `core::error`: `TarpackError` and result aliases.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//! use tarpack::common::archive::options::{AddFileOptions, AddFolderOptions};
//! use tarpack::common::archive::tar::TarSink;
//! use tarpack::common::archive::writer::ArchiveEntryWriter;
//!
//! # fn main() -> tarpack::core::error::ArchiveResult<()> {
//! let mut writer = ArchiveEntryWriter::new(TarSink::new(Vec::new()));
//! writer.write_directory_tree(
//!     Path::new("./dist"),
//!     &AddFolderOptions { internal_path: "pkg".into(), ..Default::default() },
//! )?;
//! writer.write_file_from_bytes("VERSION", b"1.0.0", &AddFileOptions::default())?;
//! let tar_bytes: Vec<u8> = writer.finish()?.into_inner()?;
//! # let _ = tar_bytes;
//! # Ok(())
//! # }
//! ```
//!

pub mod common;
pub mod core;
