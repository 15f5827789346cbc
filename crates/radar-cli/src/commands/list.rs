//! `list` command

use super::{optional_path, required_path};
use anyhow::{Context, Result};
use clap::ArgMatches;
use radar_io::{load_meta, rendered_state, ArtifactStatus};
use std::io::Write;
use std::path::PathBuf;

/// Arguments of `list`
#[derive(Debug, Clone)]
pub struct ListArgs {
    /// Snapshot directory
    pub input: PathBuf,
    /// HTML output directory
    pub output: PathBuf,
    /// Explicit meta file
    pub meta: Option<PathBuf>,
}

impl ListArgs {
    /// Extract from parsed matches
    ///
    /// # Errors
    /// Returns error if a required argument is absent
    pub fn from_matches(args: &ArgMatches) -> Result<Self> {
        Ok(Self {
            input: required_path(args, "input")?,
            output: required_path(args, "output")?,
            meta: optional_path(args, "meta"),
        })
    }
}

/// Print each snapshot with its render status
///
/// # Errors
/// Returns error if meta or the input directory cannot be read
pub fn run(args: &ListArgs, out: &mut impl Write) -> Result<()> {
    let meta = load_meta(args.meta.as_deref(), Some(args.input.as_path()))
        .context("failed to read meta file")?;
    let states =
        rendered_state(&args.input, &args.output, &meta).context("failed to read input directory")?;

    if states.is_empty() {
        writeln!(out, "No radar files found in {}", args.input.display())?;
        return Ok(());
    }

    writeln!(out, "Found {} radar(s) in {}:", states.len(), args.input.display())?;
    writeln!(out)?;
    for state in &states {
        match &state.status {
            ArtifactStatus::Rendered(at) => writeln!(
                out,
                "  {} ✓ (rendered: {})",
                state.date,
                at.format("%Y-%m-%d %H:%M:%S")
            )?,
            ArtifactStatus::Missing => writeln!(out, "  {} ✗ (not rendered)", state.date)?,
            ArtifactStatus::Unknown(reason) => {
                writeln!(out, "  {} ? (error checking: {reason})", state.date)?;
            }
        }
    }
    Ok(())
}
