//! # tarpack Archive Entry Writer (`common::archive::writer`)
//!
//! File: cli/src/common/archive/writer.rs
//!
//! ## Overview
//!
//! `ArchiveEntryWriter` turns files, in-memory buffers and directory trees into archive
//! entries. It owns the archive primitive (any `ArchiveSink`) and is the only thing that
//! writes to it, so entries land in the archive in exactly the order the operations
//! produce them.
//!
//! ## Architecture
//!
//! - **File entries** are streamed from an open handle. The handle lives for one call.
//! - **Synthesized entries** take their bytes from a buffer and their timestamp from the
//!   injected `Clock`.
//! - **Empty-directory markers** are zero-size directory entries that keep empty folders
//!   from vanishing.
//! - **Directory trees** are walked depth-first, children sorted by name. Subdirectories
//!   recurse before the next sibling is processed.
//!
//! Every operation stops at the first error and returns it unchanged. Entries written
//! before the failure stay in the archive; discarding a half-written archive is up to
//! the caller. `finish` consumes the writer, so nothing can be written after the
//! archive is finalized.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tarpack::common::archive::{options::AddFolderOptions, tar::TarSink, writer::ArchiveEntryWriter};
//! use std::path::Path;
//!
//! let mut writer = ArchiveEntryWriter::new(TarSink::new(Vec::new()));
//! writer.write_directory_tree(
//!     Path::new("./dist"),
//!     &AddFolderOptions { internal_path: "pkg".into(), ..Default::default() },
//! )?;
//! let tar_bytes = writer.finish()?.into_inner()?;
//! ```
//!
use super::clock::{Clock, SystemClock};
use super::options::{AddFileOptions, AddFolderOptions};
use super::policy::{base_name, disk_mode, join_internal, permission_bits, synthesized_mode};
use super::sink::{ArchiveSink, EntryHeader, EntryKind};
use crate::core::error::{ArchiveResult, TarpackError};
use chrono::{DateTime, Utc};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info};

/// Writes archive entries into an `ArchiveSink`.
pub struct ArchiveEntryWriter<S: ArchiveSink> {
    sink: S,
    clock: Box<dyn Clock>,
}

impl<S: ArchiveSink> ArchiveEntryWriter<S> {
    /// Creates a writer that stamps synthesized entries with wall-clock time.
    pub fn new(sink: S) -> Self {
        Self::with_clock(sink, Box::new(SystemClock))
    }

    pub fn with_clock(sink: S, clock: Box<dyn Clock>) -> Self {
        Self { sink, clock }
    }

    /// Adds one file from disk as `options.internal_path/<base name>`.
    ///
    /// The stored mode is the source permission bits, with `0o111` added when
    /// `force_executable_flags` is set. Size and mtime come from the open handle.
    ///
    /// # Errors
    ///
    /// `TarpackError::Io` if the file cannot be opened or stat'd, if the sink fails,
    /// or if the file yields fewer bytes than its stat size (`UnexpectedEof`). `TarSink`
    /// refuses absolute names and names containing `..` with `InvalidInput`.
    pub fn write_file_from_disk(
        &mut self,
        file_path: &Path,
        options: &AddFileOptions,
    ) -> ArchiveResult<()> {
        let file = File::open(file_path)?;
        let metadata = file.metadata()?;

        let header = EntryHeader {
            name: non_empty_name(join_internal(&options.internal_path, &base_name(file_path)))?,
            mode: disk_mode(permission_bits(&metadata), options.force_executable_flags),
            size: metadata.len(),
            mtime: modified_time(&metadata)?,
            kind: EntryKind::File,
        };
        debug!(
            "Adding file {} as '{}' ({} bytes, mode {:o})",
            file_path.display(),
            header.name,
            header.size,
            header.mode
        );

        let mut body = ExactReader::new(file, header.size);
        self.sink.append_entry(&header, &mut body)?;
        Ok(())
    }

    /// Adds each file in order. Stops at the first error.
    pub fn write_files_from_disk<P: AsRef<Path>>(
        &mut self,
        file_paths: &[P],
        options: &AddFileOptions,
    ) -> ArchiveResult<()> {
        for file_path in file_paths {
            self.write_file_from_disk(file_path.as_ref(), options)?;
        }
        Ok(())
    }

    /// Adds an in-memory buffer as `options.internal_path/<filename>`.
    ///
    /// The mode is always `0o666`, or `0o777` with `force_executable_flags`. The
    /// timestamp is the writer clock's current time.
    ///
    /// # Errors
    ///
    /// `TarpackError::InvalidArgument` if `filename` is empty (nothing is written),
    /// `TarpackError::Io` if the sink fails.
    pub fn write_file_from_bytes(
        &mut self,
        filename: &str,
        content: &[u8],
        options: &AddFileOptions,
    ) -> ArchiveResult<()> {
        if filename.is_empty() {
            return Err(TarpackError::InvalidArgument(
                "filename for in-memory content is empty".to_string(),
            ));
        }

        let header = EntryHeader {
            name: non_empty_name(join_internal(&options.internal_path, filename))?,
            mode: synthesized_mode(options.force_executable_flags),
            size: content.len() as u64,
            mtime: self.clock.now(),
            kind: EntryKind::File,
        };
        debug!(
            "Adding generated file '{}' ({} bytes, mode {:o})",
            header.name, header.size, header.mode
        );

        let mut body = content;
        self.sink.append_entry(&header, &mut body)?;
        Ok(())
    }

    /// Adds a zero-size directory entry named exactly `internal_path`, carrying the mode
    /// and mtime of `folder_path`.
    ///
    /// # Errors
    ///
    /// `TarpackError::Io` if `folder_path` cannot be stat'd, `NotADirectory` if it is
    /// not a directory, `InvalidArgument` if `internal_path` is empty.
    pub fn write_empty_directory(
        &mut self,
        folder_path: &Path,
        internal_path: &str,
    ) -> ArchiveResult<()> {
        let metadata = fs::metadata(folder_path)?;
        if !metadata.is_dir() {
            return Err(TarpackError::NotADirectory {
                path: folder_path.to_path_buf(),
            });
        }

        let header = EntryHeader {
            name: non_empty_name(internal_path.to_string())?,
            mode: permission_bits(&metadata),
            size: 0,
            mtime: modified_time(&metadata)?,
            kind: EntryKind::Directory,
        };
        debug!(
            "Adding empty directory {} as '{}'",
            folder_path.display(),
            header.name
        );

        self.sink.append_entry(&header, &mut io::empty())?;
        Ok(())
    }

    /// Adds the contents of `folder_path`.
    ///
    /// Contents land under `options.internal_path`, or under
    /// `options.internal_path/<folder name>` with `include_root_folder`. Without
    /// `include_root_folder`, a folder with no children is recorded as a single directory
    /// entry named `options.internal_path/<folder name>`; with it, an empty folder adds
    /// nothing. Empty subfolders are always recorded. With `non_recursive` only the
    /// direct file children are added.
    ///
    /// # Errors
    ///
    /// The first error from listing the folder or from any child entry. Later siblings
    /// are not written. Entry names that are absolute or contain `..` are refused by
    /// `TarSink` with an `InvalidInput` I/O error.
    pub fn write_directory_tree(
        &mut self,
        folder_path: &Path,
        options: &AddFolderOptions,
    ) -> ArchiveResult<()> {
        info!(
            "Adding folder {} under '{}'",
            folder_path.display(),
            options.internal_path
        );
        let rooted = join_internal(&options.internal_path, &base_name(folder_path));
        if options.include_root_folder {
            self.walk_folder(folder_path, &rooted, None, options)
        } else {
            self.walk_folder(folder_path, &options.internal_path, Some(&rooted), options)
        }
    }

    /// Adds each folder in order. Stops at the first error.
    pub fn write_directory_trees<P: AsRef<Path>>(
        &mut self,
        folder_paths: &[P],
        options: &AddFolderOptions,
    ) -> ArchiveResult<()> {
        for folder_path in folder_paths {
            self.write_directory_tree(folder_path.as_ref(), options)?;
        }
        Ok(())
    }

    /// Finalizes the archive and hands back the sink.
    pub fn finish(mut self) -> ArchiveResult<S> {
        self.sink.finish()?;
        info!("Archive finalized");
        Ok(self.sink)
    }

    /// Writes the children of `folder_path` under `prefix`. An empty folder becomes a
    /// directory entry named `marker`, or nothing when there is no marker.
    fn walk_folder(
        &mut self,
        folder_path: &Path,
        prefix: &str,
        marker: Option<&str>,
        options: &AddFolderOptions,
    ) -> ArchiveResult<()> {
        let mut children = fs::read_dir(folder_path)?.collect::<io::Result<Vec<_>>>()?;
        if children.is_empty() {
            return match marker {
                Some(marker) => self.write_empty_directory(folder_path, marker),
                None => {
                    debug!("Folder {} is empty, nothing written", folder_path.display());
                    Ok(())
                }
            };
        }
        children.sort_by_key(|child| child.file_name());

        let nested = AddFolderOptions {
            internal_path: String::new(),
            force_executable_flags: options.force_executable_flags,
            non_recursive: false,
            include_root_folder: false,
        };
        for child in children {
            let child_path = child.path();
            if child.file_type()?.is_dir() {
                if options.non_recursive {
                    debug!("Skipping subdirectory {}", child_path.display());
                    continue;
                }
                let child_prefix = join_internal(prefix, &child.file_name().to_string_lossy());
                self.walk_folder(&child_path, &child_prefix, Some(&child_prefix), &nested)?;
            } else {
                self.write_file_from_disk(&child_path, &options.file_options(prefix))?;
            }
        }
        Ok(())
    }
}

fn non_empty_name(name: String) -> ArchiveResult<String> {
    if name.is_empty() {
        Err(TarpackError::InvalidArgument(
            "archive entry name is empty".to_string(),
        ))
    } else {
        Ok(name)
    }
}

fn modified_time(metadata: &fs::Metadata) -> ArchiveResult<DateTime<Utc>> {
    Ok(DateTime::<Utc>::from(metadata.modified()?))
}

/// Yields exactly `remaining` bytes of `inner`; running dry early is an error.
struct ExactReader<R> {
    inner: R,
    remaining: u64,
}

impl<R: Read> ExactReader<R> {
    fn new(inner: R, size: u64) -> Self {
        Self {
            inner,
            remaining: size,
        }
    }
}

impl<R: Read> Read for ExactReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.remaining == 0 || buf.is_empty() {
            return Ok(0);
        }
        let limit = usize::try_from(self.remaining).map_or(buf.len(), |r| r.min(buf.len()));
        let read = self.inner.read(&mut buf[..limit])?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("short read: {} bytes missing", self.remaining),
            ));
        }
        self.remaining -= read as u64;
        Ok(read)
    }
}
