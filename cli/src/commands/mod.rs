//! # tarpack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Each command defines its own Clap arguments struct and a handler that turns those
//! arguments into calls on the library.
//!
//! - `pack`: Builds an archive from folders, files and generated content.
//! - `list`: Prints the entries of an existing archive.
//!

/// `tarpack pack`: write a new archive.
pub mod pack;
/// `tarpack list`: print archive entries.
pub mod list;
