//! # tarpack TAR Sink (`common::archive::tar`)
//!
//! File: cli/src/common/archive/tar.rs
//!
//! ## Overview
//!
//! This module provides `TarSink`, the production `ArchiveSink`. It leverages the
//! `tar` crate for header encoding, checksums, block padding and the end-of-archive
//! marker. No compression is applied; the output is a plain, streamable `.tar`.
//!
//! ## Architecture
//!
//! - Every entry gets a GNU header, so names longer than 100 bytes are emitted through
//!   the crate's long-name extension.
//! - Owner ids and names are left zeroed; only name, mode, size, mtime and entry type
//!   are set.
//! - Path validation is the crate's: absolute names and `..` components are rejected
//!   with an `InvalidInput` I/O error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tarpack::common::archive::{tar::TarSink, writer::ArchiveEntryWriter};
//!
//! let file = std::fs::File::create("out.tar")?;
//! let mut writer = ArchiveEntryWriter::new(TarSink::new(file));
//! writer.write_file_from_bytes("VERSION", b"1.0.0", &Default::default())?;
//! let file = writer.finish()?.into_inner()?;
//! ```
//!
use super::sink::{ArchiveSink, EntryHeader, EntryKind};
use std::io::{self, Read, Write};
use tracing::trace;

/// `ArchiveSink` writing an uncompressed tar stream into `W`.
pub struct TarSink<W: Write> {
    builder: tar::Builder<W>,
}

impl<W: Write> TarSink<W> {
    pub fn new(output: W) -> Self {
        Self {
            builder: tar::Builder::new(output),
        }
    }

    /// Finalizes the archive if needed and returns the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.builder.into_inner()
    }
}

impl<W: Write> ArchiveSink for TarSink<W> {
    fn append_entry(&mut self, header: &EntryHeader, body: &mut dyn Read) -> io::Result<()> {
        let mut tar_header = tar::Header::new_gnu();
        tar_header.set_entry_type(match header.kind {
            EntryKind::File => tar::EntryType::Regular,
            EntryKind::Directory => tar::EntryType::Directory,
        });
        tar_header.set_mode(header.mode);
        tar_header.set_size(header.size);
        tar_header.set_mtime(header.mtime_secs());
        trace!(
            "tar header: {} mode={:o} size={}",
            header.name,
            header.mode,
            header.size
        );
        // append_data sets the path (with long-name support) and the checksum.
        self.builder
            .append_data(&mut tar_header, &header.name, body)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.builder.finish()
    }
}
