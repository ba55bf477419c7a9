//! # tarpack Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module holds the filesystem helpers the command handlers need around the
//! archive writer: making sure the output directory exists and opening the archive
//! destination, which is either a file or standard output.
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing and checks
//!   that an existing path is a directory.
//! - **`open_output`**: Opens a buffered writer for the archive. `-` selects stdout;
//!   any other path is created (truncated) after its parent directory is ensured.
//!
//! ```rust,ignore
//! use tarpack::common::fs::io;
//! use std::path::Path;
//!
//! let out = io::open_output(Path::new("build/pkg.tar"))?;
//! ```
//!
use crate::core::error::{Result, TarpackError};
use anyhow::Context;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Path that selects standard output as the archive destination.
pub const STDOUT_PATH: &str = "-";

/// Ensures that a directory exists at the specified path.
///
/// # Errors
///
/// Returns an `Err` if:
/// - The path exists but is not a directory.
/// - Creating the directory fails (e.g., due to permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(TarpackError::NotADirectory {
            path: path.to_path_buf()
        });
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Opens the archive destination for writing.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the file cannot be
/// created.
pub fn open_output(path: &Path) -> Result<Box<dyn Write>> {
    if path.as_os_str() == STDOUT_PATH {
        debug!("Writing archive to stdout");
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create archive file {:?}", path))?;
    info!("Writing archive to {:?}", path);
    Ok(Box::new(BufWriter::new(file)))
}
