//! `generate` command

use super::{optional_path, required_path};
use anyhow::{Context, Result};
use clap::ArgMatches;
use radar_core::{GenerateOptions, GenerationReport, Generator};
use radar_io::{artifact_path, load_meta, read_snapshots, FsArtifactStore};
use radar_render::HandlebarsRenderer;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Arguments of `generate`
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Snapshot directory
    pub input: PathBuf,
    /// HTML output directory
    pub output: PathBuf,
    /// Custom template file
    pub template: Option<PathBuf>,
    /// Explicit meta file
    pub meta: Option<PathBuf>,
    /// Policy switches
    pub options: GenerateOptions,
}

impl GenerateArgs {
    /// Extract from parsed matches
    ///
    /// # Errors
    /// Returns error if a required argument is absent
    pub fn from_matches(args: &ArgMatches) -> Result<Self> {
        Ok(Self {
            input: required_path(args, "input")?,
            output: required_path(args, "output")?,
            template: optional_path(args, "template"),
            meta: optional_path(args, "meta"),
            options: GenerateOptions {
                force: args.get_flag("force"),
                include_links: args.get_flag("include-links"),
                add_changes_summary: args.get_flag("add-changes"),
                skip_first_snapshot_changes: args
                    .get_one::<bool>("skip-first-radar-changes")
                    .copied()
                    .unwrap_or(true),
            },
        })
    }
}

/// Render every snapshot in the input directory
///
/// # Errors
/// Returns the first configuration, snapshot, render or write error
pub fn run(args: &GenerateArgs, out: &mut impl Write) -> Result<GenerationReport> {
    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        "starting generation"
    );

    let meta = load_meta(args.meta.as_deref(), Some(args.input.as_path()))
        .context("failed to read meta file")?;
    let snapshots = read_snapshots(&args.input, &meta).context("failed to read input directory")?;
    let renderer =
        HandlebarsRenderer::load(args.template.as_deref()).context("failed to load template")?;
    let mut store = FsArtifactStore::new(&args.output);

    let report = Generator::new(&meta, &renderer, &mut store, args.options)
        .run(snapshots)
        .context("failed to generate radar")?;

    for date in report.generated() {
        writeln!(out, "Generated {}", artifact_path(&args.output, date).display())?;
    }
    writeln!(
        out,
        "{} radar(s) generated, {} skipped",
        report.generated().count(),
        report.skipped().count()
    )?;
    Ok(report)
}
