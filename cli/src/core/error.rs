//! # tarpack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout tarpack. It provides a
//! consistent approach to error management for both the archive-writing library
//! and the command handlers built on top of it.
//!
//! ## Architecture
//!
//! The error system consists of three pieces:
//! - `TarpackError`: A custom error enum using `thiserror` for the specific error kinds
//!   the archive writer can report.
//! - `ArchiveResult<T>`: The result type of every archive writer operation. Callers can
//!   match on the error kind directly.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by configuration loading and
//!   command handlers, where context matters more than the concrete type.
//!
//! Filesystem and archive primitive failures are carried by `TarpackError::Io`
//! unchanged, so callers still see the original `std::io::ErrorKind`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Library code returns typed errors
//! if filename.is_empty() {
//!     return Err(TarpackError::InvalidArgument("empty filename".into()));
//! }
//!
//! // Application code adds context using anyhow
//! writer
//!     .write_directory_tree(&path, &options)
//!     .with_context(|| format!("Failed to add folder: {}", path.display()))?;
//!
//! // Pattern matching on error kinds through anyhow
//! match result {
//!     Err(e) if matches!(e.downcast_ref::<TarpackError>(), Some(TarpackError::NotADirectory { .. })) => {
//!         println!("Skipping non-directory");
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for tarpack.
#[derive(Error, Debug)]
pub enum TarpackError {
    /// Open, stat, list, read or archive write failure, passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

impl TarpackError {
    /// The underlying I/O error kind, if this is an `Io` error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            TarpackError::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Result type of the archive writer operations.
pub type ArchiveResult<T> = std::result::Result<T, TarpackError>;

/// Type alias for Result using anyhow::Error for application code.
pub type Result<T> = anyhow::Result<T>;
