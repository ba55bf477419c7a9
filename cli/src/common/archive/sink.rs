//! # Archive Primitive Contract (`common::archive::sink`)
//!
//! File: cli/src/common/archive/sink.rs
//!
//! ## Overview
//!
//! The archive writer never touches the byte layout of an archive. It describes each
//! entry with an `EntryHeader` and hands it, together with a body reader, to an
//! `ArchiveSink`. The sink encodes the header, frames the body and writes the
//! end-of-archive marker on `finish`.
//!
//! - **`TarSink`** (`common::archive::tar`) is the production sink.
//! - Tests use an in-memory sink that records the headers and bodies it receives.
//!
use chrono::{DateTime, Utc};
use std::io::{self, Read};

/// Kind of record stored in the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Metadata of one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeader {
    /// Internal path of the entry inside the archive.
    pub name: String,
    /// Permission bits (`0o7777` range).
    pub mode: u32,
    /// Body length in bytes. Always 0 for directories.
    pub size: u64,
    pub mtime: DateTime<Utc>,
    pub kind: EntryKind,
}

impl EntryHeader {
    /// Modification time as whole seconds since the Unix epoch, clamped at zero.
    pub fn mtime_secs(&self) -> u64 {
        u64::try_from(self.mtime.timestamp()).unwrap_or(0)
    }
}

/// The narrow interface the archive writer uses to emit entries.
pub trait ArchiveSink {
    /// Writes `header` followed by exactly `header.size` bytes read from `body`.
    fn append_entry(&mut self, header: &EntryHeader, body: &mut dyn Read) -> io::Result<()>;

    /// Writes the end-of-archive marker. Called once, after the last entry.
    fn finish(&mut self) -> io::Result<()>;
}
