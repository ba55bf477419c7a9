//! # tarpack Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by the archive writer and the
//! command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and result aliases
//!
//! ```rust,ignore
//! use tarpack::core::config; // For loading configuration
//! use tarpack::core::error::{TarpackError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
