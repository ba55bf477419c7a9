//! # tarpack List Command
//!
//! File: cli/src/commands/list.rs
//!
//! ## Overview
//!
//! Implements `tarpack list`, which prints one line per archive entry:
//!
//! ```text
//! d0755          0 2024-01-01 00:00:00 pkg/b
//! -0644         11 2024-01-01 00:00:00 pkg/f.txt
//! ```
//!
//! The columns are entry type (`d` directory, `-` anything else), octal permission
//! bits, size in bytes, modification time in UTC and the internal path.
//!
use anyhow::Context;
use chrono::DateTime;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tarpack::core::error::Result;
use tracing::info;

/// # List Arguments (`ListArgs`)
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Archive to read.
    archive: PathBuf,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let file = File::open(&args.archive)
        .with_context(|| format!("Failed to open archive {:?}", args.archive))?;
    let stdout = io::stdout();
    let count = list_entries(BufReader::new(file), &mut stdout.lock())
        .with_context(|| format!("Failed to read archive {:?}", args.archive))?;
    info!("Listed {} entries from {:?}", count, args.archive);
    Ok(())
}

/// Writes one line per entry of the tar stream `input` to `out`. Returns the entry count.
fn list_entries<R: io::Read, W: Write>(input: R, out: &mut W) -> Result<usize> {
    let mut archive = tar::Archive::new(input);
    let mut count = 0;
    for entry in archive.entries()? {
        let entry = entry?;
        let header = entry.header();
        let kind = if header.entry_type().is_dir() { 'd' } else { '-' };
        let mtime = i64::try_from(header.mtime()?)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{}{:04o} {:>10} {} {}",
            kind,
            header.mode()?,
            header.size()?,
            mtime,
            entry.path()?.display()
        )?;
        count += 1;
    }
    Ok(count)
}
