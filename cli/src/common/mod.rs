//! # tarpack Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared modules used by the command handlers and by library users:
//!
//! - **`archive`**: The archive entry writer, its policies and the tar sink.
//! - **`fs`**: Archive destination handling.
//!
//! ```rust,ignore
//! use tarpack::common::{archive, fs};
//! ```
//!

/// Archive entry construction and the tar primitive.
pub mod archive;
/// Filesystem helpers for the archive destination.
pub mod fs;
