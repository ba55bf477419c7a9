//! # tarpack Pack Command
//!
//! File: cli/src/commands/pack.rs
//!
//! ## Overview
//!
//! Implements `tarpack pack`, which writes a new tar archive from:
//! - folders (positional arguments), added through `write_directory_trees`,
//! - single files (`--file`), added through `write_files_from_disk`,
//! - generated files (`[[content]]` in the configuration, then `--content NAME=TEXT`),
//!   added through `write_file_from_bytes`.
//!
//! Entries are written in that order. Flags override the `[pack]` configuration
//! section; boolean flags can only switch a setting on.
//!
//! ## Examples
//!
//! ```bash
//! # Contents of ./dist under "app/", plus a generated VERSION file
//! tarpack pack -o app.tar ./dist --prefix app --content VERSION=1.0.0
//!
//! # Only the top-level files of ./bin, all marked executable, written to stdout
//! tarpack pack -o - ./bin --non-recursive --force-exec > bin.tar
//! ```
//!
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tarpack::common::archive::clock::{Clock, FixedClock, SystemClock};
use tarpack::common::archive::options::{AddFileOptions, AddFolderOptions};
use tarpack::common::archive::tar::TarSink;
use tarpack::common::archive::writer::ArchiveEntryWriter;
use tarpack::common::fs::io;
use tarpack::core::config::{self, Config};
use tarpack::core::error::{Result, TarpackError};
use tracing::{debug, info};

/// # Pack Arguments (`PackArgs`)
#[derive(Parser, Debug)]
pub struct PackArgs {
    /// Folders whose contents are added to the archive.
    #[arg(value_name = "FOLDER")]
    folders: Vec<PathBuf>,

    /// Archive destination. `-` writes to stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Single file to add (repeatable).
    #[arg(long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Generated file to add (repeatable).
    #[arg(long = "content", value_name = "NAME=TEXT", value_parser = parse_content)]
    contents: Vec<(String, String)>,

    /// Internal path prefix for every entry.
    #[arg(short, long)]
    prefix: Option<String>,

    /// Mark every file executable for owner, group and other.
    #[arg(long)]
    force_exec: bool,

    /// Skip subdirectories of the given folders.
    #[arg(long)]
    non_recursive: bool,

    /// Nest each folder's contents under the folder's own name.
    #[arg(long)]
    include_root: bool,

    /// Unix timestamp for generated files instead of the current time.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(i64).range(0..))]
    content_mtime: Option<i64>,

    /// Read configuration from this file only.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Settings after merging flags over configuration.
#[derive(Debug, PartialEq)]
struct PackPlan {
    output: PathBuf,
    folder_options: AddFolderOptions,
    content_mtime: Option<i64>,
    /// `(name, text, executable)`
    contents: Vec<(String, String, bool)>,
}

/// # Handle Pack Command (`handle_pack`)
///
/// Loads configuration, resolves the settings and writes the archive.
///
/// ## Errors
///
/// Returns an `Err` if the configuration is invalid, no output or no input is given,
/// or any entry fails to be written. A failed run may leave a partial archive behind.
pub fn handle_pack(args: PackArgs) -> Result<()> {
    let cfg = config::load_config(args.config.as_deref())?;
    let folders = args.folders.clone();
    let files = args.files.clone();
    let plan = resolve_plan(args, cfg)?;
    debug!("Pack plan: {:?}", plan);

    if folders.is_empty() && files.is_empty() && plan.contents.is_empty() {
        anyhow::bail!(TarpackError::ArgumentParsing(
            "Nothing to pack: give at least one folder, --file or --content.".to_string()
        ));
    }

    let clock: Box<dyn Clock> = match plan.content_mtime {
        Some(secs) => Box::new(FixedClock::from_timestamp(secs).ok_or_else(|| {
            TarpackError::ArgumentParsing(format!("content mtime {} is out of range", secs))
        })?),
        None => Box::new(SystemClock),
    };

    let output = io::open_output(&plan.output)?;
    let mut writer = ArchiveEntryWriter::with_clock(TarSink::new(output), clock);

    writer
        .write_directory_trees(&folders, &plan.folder_options)
        .with_context(|| format!("Failed to add folders {:?}", folders))?;

    let file_options = AddFileOptions {
        internal_path: plan.folder_options.internal_path.clone(),
        force_executable_flags: plan.folder_options.force_executable_flags,
    };
    writer
        .write_files_from_disk(&files, &file_options)
        .with_context(|| format!("Failed to add files {:?}", files))?;

    for (name, text, executable) in &plan.contents {
        let options = AddFileOptions {
            internal_path: plan.folder_options.internal_path.clone(),
            force_executable_flags: file_options.force_executable_flags || *executable,
        };
        writer
            .write_file_from_bytes(name, text.as_bytes(), &options)
            .with_context(|| format!("Failed to add generated file '{}'", name))?;
    }

    let mut output = writer
        .finish()
        .context("Failed to finalize archive")?
        .into_inner()
        .context("Failed to finalize archive")?;
    output.flush().context("Failed to flush archive output")?;

    info!(
        "Packed {} folder(s), {} file(s), {} generated file(s) into {:?}",
        folders.len(),
        files.len(),
        plan.contents.len(),
        plan.output
    );
    Ok(())
}

fn resolve_plan(args: PackArgs, cfg: Config) -> Result<PackPlan> {
    let output = args
        .output
        .or_else(|| cfg.pack.output.map(PathBuf::from))
        .ok_or_else(|| {
            TarpackError::ArgumentParsing(
                "No output given: pass --output or set `output` in [pack].".to_string(),
            )
        })?;

    let folder_options = AddFolderOptions {
        internal_path: args.prefix.or(cfg.pack.prefix).unwrap_or_default(),
        force_executable_flags: args.force_exec || cfg.pack.force_executable.unwrap_or(false),
        non_recursive: args.non_recursive || cfg.pack.non_recursive.unwrap_or(false),
        include_root_folder: args.include_root || cfg.pack.include_root_folder.unwrap_or(false),
    };

    let contents = cfg
        .content
        .into_iter()
        .map(|c| (c.name, c.text, c.executable))
        .chain(args.contents.into_iter().map(|(name, text)| (name, text, false)))
        .collect();

    Ok(PackPlan {
        output,
        folder_options,
        content_mtime: args.content_mtime.or(cfg.pack.content_mtime),
        contents,
    })
}

/// Parses `NAME=TEXT`. The text may be empty and may itself contain `=`.
fn parse_content(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, _)) if name.is_empty() => Err(format!("missing file name in '{}'", raw)),
        Some((name, text)) => Ok((name.to_string(), text.to_string())),
        None => Err(format!("expected NAME=TEXT, got '{}'", raw)),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tarpack::core::config::{ContentFile, PackDefaults};

    fn parse(args: &[&str]) -> PackArgs {
        PackArgs::try_parse_from(std::iter::once("pack").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_parse_content() {
        assert_eq!(
            parse_content("VERSION=1.0"),
            Ok(("VERSION".to_string(), "1.0".to_string()))
        );
        assert_eq!(
            parse_content("env=A=B"),
            Ok(("env".to_string(), "A=B".to_string()))
        );
        assert_eq!(parse_content("EMPTY="), Ok(("EMPTY".to_string(), String::new())));
        assert!(parse_content("=text").is_err());
        assert!(parse_content("novalue").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cfg = Config {
            pack: PackDefaults {
                prefix: Some("from-config".into()),
                output: Some("/tmp/config.tar".into()),
                non_recursive: Some(true),
                content_mtime: Some(10),
                ..Default::default()
            },
            content: vec![ContentFile {
                name: "CONFIG".into(),
                text: "c".into(),
                executable: true,
            }],
        };
        let args = parse(&[
            "dist",
            "-o",
            "out.tar",
            "--prefix",
            "cli",
            "--force-exec",
            "--content",
            "CLI=x",
            "--content-mtime",
            "20",
        ]);

        let plan = resolve_plan(args, cfg).unwrap();
        assert_eq!(plan.output, PathBuf::from("out.tar"));
        assert_eq!(
            plan.folder_options,
            AddFolderOptions {
                internal_path: "cli".into(),
                force_executable_flags: true,
                non_recursive: true,
                include_root_folder: false,
            }
        );
        assert_eq!(plan.content_mtime, Some(20));
        assert_eq!(
            plan.contents,
            vec![
                ("CONFIG".to_string(), "c".to_string(), true),
                ("CLI".to_string(), "x".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let cfg = Config {
            pack: PackDefaults {
                prefix: Some("pkg".into()),
                output: Some("/tmp/pkg.tar".into()),
                include_root_folder: Some(true),
                ..Default::default()
            },
            ..Default::default()
        };
        let plan = resolve_plan(parse(&["dist"]), cfg).unwrap();
        assert_eq!(plan.output, PathBuf::from("/tmp/pkg.tar"));
        assert_eq!(plan.folder_options.internal_path, "pkg");
        assert!(plan.folder_options.include_root_folder);
        assert!(!plan.folder_options.force_executable_flags);
        assert_eq!(plan.content_mtime, None);
    }

    #[test]
    fn test_negative_content_mtime_rejected() {
        let result = PackArgs::try_parse_from(["pack", "dist", "--content-mtime=-5"]);
        assert!(result.is_err());
        assert_eq!(parse(&["dist", "--content-mtime", "0"]).content_mtime, Some(0));
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let result = resolve_plan(parse(&["dist"]), Config::default());
        assert!(result.unwrap_err().to_string().contains("No output given"));
    }
}
