//! # tarpack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the command handlers. The archive writer itself talks to
//! `std::fs` directly; this module only covers the archive destination.
//!
//! - **`io`**: `ensure_dir_exists` and `open_output`.
//!

/// Output directory and archive destination handling.
pub mod io;
