//! `validate` command

use super::{optional_path, required_path};
use anyhow::{Context, Result};
use clap::ArgMatches;
use radar_io::{discover_snapshots, load_meta, validate_snapshot_file};
use std::io::Write;
use std::path::PathBuf;

/// Arguments of `validate`
#[derive(Debug, Clone)]
pub struct ValidateArgs {
    /// Snapshot directory
    pub input: PathBuf,
    /// Explicit meta file
    pub meta: Option<PathBuf>,
    /// Report passing files too
    pub verbose: bool,
}

impl ValidateArgs {
    /// Extract from parsed matches
    ///
    /// # Errors
    /// Returns error if a required argument is absent
    pub fn from_matches(args: &ArgMatches) -> Result<Self> {
        Ok(Self {
            input: required_path(args, "input")?,
            meta: optional_path(args, "meta"),
            verbose: args.get_flag("verbose"),
        })
    }
}

/// File counts of one validation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationSummary {
    /// Files that passed
    pub passed: usize,
    /// Files that failed
    pub failed: usize,
}

impl ValidationSummary {
    /// Whether every file passed
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Validate every snapshot file, reporting failures on `err`
///
/// # Errors
/// Returns error if meta or the input directory cannot be read
pub fn run(args: &ValidateArgs, out: &mut impl Write, err: &mut impl Write) -> Result<ValidationSummary> {
    let meta = load_meta(args.meta.as_deref(), Some(args.input.as_path()))
        .context("failed to read meta")?;
    let files = discover_snapshots(&args.input, &meta).context("failed to read input directory")?;

    let mut summary = ValidationSummary::default();
    if files.is_empty() {
        writeln!(out, "No radar files found in {}", args.input.display())?;
        return Ok(summary);
    }

    for path in &files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match validate_snapshot_file(path, &meta) {
            Ok(_) => {
                summary.passed += 1;
                if args.verbose {
                    writeln!(out, "OK: {name}")?;
                }
            }
            Err(e) => {
                summary.failed += 1;
                writeln!(err, "ERROR: {name} - {e}")?;
            }
        }
    }

    if summary.is_ok() {
        writeln!(out, "OK: {} file(s) processed", files.len())?;
    } else {
        writeln!(
            err,
            "Validation completed with errors: {} file(s) failed, {} file(s) passed",
            summary.failed, summary.passed
        )?;
    }
    Ok(summary)
}
