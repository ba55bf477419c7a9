//! # tarpack Archive Module (`common::archive`)
//!
//! File: cli/src/common/archive/mod.rs
//!
//! ## Overview
//!
//! This module groups everything needed to turn files, folders and generated content
//! into tar archive entries.
//!
//! ## Architecture
//!
//! - **`writer`**: `ArchiveEntryWriter`, the traversal and entry-construction logic.
//! - **`policy`**: Internal path joining and permission-bit normalization.
//! - **`options`**: `AddFileOptions` and `AddFolderOptions`.
//! - **`sink`**: The `ArchiveSink` contract and the `EntryHeader` it consumes.
//! - **`tar`**: `TarSink`, the `ArchiveSink` backed by the `tar` crate.
//! - **`clock`**: Injected time source for synthesized entries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tarpack::common::archive::{options::AddFolderOptions, tar::TarSink, writer::ArchiveEntryWriter};
//! use std::path::Path;
//!
//! let file = std::fs::File::create("dist.tar")?;
//! let mut writer = ArchiveEntryWriter::new(TarSink::new(file));
//! writer.write_directory_tree(Path::new("./dist"), &AddFolderOptions::default())?;
//! writer.finish()?.into_inner()?;
//! ```
//!

pub mod clock;
pub mod options;
pub mod policy;
pub mod sink;
pub mod tar;
pub mod writer;
