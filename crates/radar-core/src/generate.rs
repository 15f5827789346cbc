//! Generation orchestrator
//!
//! Walks snapshots in chronological order, threading diff state from one to
//! the next, and hands each payload to a [`Renderer`] and [`ArtifactStore`].
//!
//! ```text
//! snapshots → order → diff(prev) → to_entries + changes → payload → render → store
//!                         ↑____________________________________________|
//!                                    previous = diffed snapshot
//! ```
//!
//! Every snapshot is diffed even when its artifact is skipped, so the rolling
//! two-snapshot chain never breaks. The first error aborts the run.

use crate::changes::build_changes_summary;
use crate::diff::{diff, DiffStats};
use crate::error::{GenerateResult, RenderError, SequencingError, StoreError};
use crate::mapper::to_entries;
use crate::meta::Meta;
use crate::payload::{quadrant_descriptors, ring_descriptors, RenderPayload};
use crate::technology::{Snapshot, SnapshotDate};
use tracing::{debug, info};

/// Template collaborator
pub trait Renderer {
    /// Render one payload to a document
    ///
    /// # Errors
    /// Returns error if the template rejects the payload
    fn render(&self, payload: &RenderPayload) -> Result<String, RenderError>;
}

/// Artifact persistence collaborator
pub trait ArtifactStore {
    /// Whether an artifact for `date` already exists
    ///
    /// # Errors
    /// Returns error if existence cannot be determined
    fn exists(&self, date: &SnapshotDate) -> Result<bool, StoreError>;

    /// Write the artifact for `date`, replacing any existing one
    ///
    /// # Errors
    /// Returns error if the artifact cannot be written
    fn write(&mut self, date: &SnapshotDate, document: &str) -> Result<(), StoreError>;
}

/// Run-level policy switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Regenerate artifacts that already exist
    pub force: bool,
    /// Give each entry a `/<quadrant>/<name>/` link
    pub include_links: bool,
    /// Attach the changes summary
    pub add_changes_summary: bool,
    /// Omit the changes summary for the chronologically first snapshot
    pub skip_first_snapshot_changes: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            force: false,
            include_links: false,
            add_changes_summary: false,
            skip_first_snapshot_changes: true,
        }
    }
}

/// What happened to one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Artifact rendered and written
    Generated,
    /// Artifact existed and force was off
    Skipped,
}

/// Outcome for one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotOutcome {
    /// Snapshot date
    pub date: SnapshotDate,
    /// Generated or skipped
    pub action: Action,
    /// Diff classification counts
    pub stats: DiffStats,
}

/// Result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Outcomes in chronological order
    pub outcomes: Vec<SnapshotOutcome>,
}

impl GenerationReport {
    /// Dates whose artifact was written
    pub fn generated(&self) -> impl Iterator<Item = &SnapshotDate> {
        self.outcomes
            .iter()
            .filter(|o| o.action == Action::Generated)
            .map(|o| &o.date)
    }

    /// Dates whose artifact was left untouched
    pub fn skipped(&self) -> impl Iterator<Item = &SnapshotDate> {
        self.outcomes
            .iter()
            .filter(|o| o.action == Action::Skipped)
            .map(|o| &o.date)
    }
}

/// Sort snapshots chronologically, rejecting duplicate dates
///
/// # Errors
/// Returns error if two snapshots resolve to the same date
pub fn order_snapshots(mut snapshots: Vec<Snapshot>) -> Result<Vec<Snapshot>, SequencingError> {
    snapshots.sort_by(|a, b| a.date.cmp(&b.date));
    if let Some(pair) = snapshots.windows(2).find(|w| w[0].date == w[1].date) {
        return Err(SequencingError::DuplicateDate {
            first: pair[0].date.raw().to_string(),
            second: pair[1].date.raw().to_string(),
        });
    }
    Ok(snapshots)
}

/// Drives one generation run
pub struct Generator<'a, R, S> {
    meta: &'a Meta,
    renderer: &'a R,
    store: &'a mut S,
    options: GenerateOptions,
}

impl<'a, R: Renderer, S: ArtifactStore> Generator<'a, R, S> {
    /// Create generator
    pub fn new(meta: &'a Meta, renderer: &'a R, store: &'a mut S, options: GenerateOptions) -> Self {
        Self {
            meta,
            renderer,
            store,
            options,
        }
    }

    /// Process every snapshot in chronological order
    ///
    /// # Errors
    /// Returns the first sequencing, mapping, render or store error
    pub fn run(&mut self, snapshots: Vec<Snapshot>) -> GenerateResult<GenerationReport> {
        let snapshots = order_snapshots(snapshots)?;
        let mut report = GenerationReport::default();
        let mut previous: Option<Snapshot> = None;

        for snapshot in snapshots {
            let is_first = previous.is_none();
            let current = diff(snapshot, previous.as_ref());
            let stats = DiffStats::of(&current.technologies);

            let action = if !self.options.force && self.store.exists(&current.date)? {
                debug!(date = %current.date, "artifact exists, skipping (use force to regenerate)");
                Action::Skipped
            } else {
                let payload = self.payload(&current, is_first)?;
                let document = self.renderer.render(&payload)?;
                self.store.write(&current.date, &document)?;
                info!(
                    date = %current.date,
                    new = stats.new,
                    moved = stats.moved,
                    deleted = stats.deleted,
                    "generated radar"
                );
                Action::Generated
            };

            report.outcomes.push(SnapshotOutcome {
                date: current.date.clone(),
                action,
                stats,
            });
            previous = Some(current);
        }

        Ok(report)
    }

    /// Assemble the render payload for a diffed snapshot
    ///
    /// # Errors
    /// Returns error if a ring or quadrant cannot be resolved
    pub fn payload(&self, snapshot: &Snapshot, is_first: bool) -> GenerateResult<RenderPayload> {
        let entries = to_entries(&snapshot.technologies, self.meta, self.options.include_links)?;

        let wants_changes = self.options.add_changes_summary
            && !(is_first && self.options.skip_first_snapshot_changes);
        let changes = if wants_changes {
            build_changes_summary(&snapshot.technologies, self.meta)
        } else {
            None
        };

        Ok(RenderPayload {
            title: self.meta.title().to_string(),
            description: self.meta.description().to_string(),
            snapshot: snapshot.date.raw().to_string(),
            date: snapshot.date.formatted(),
            version: crate::VERSION.to_string(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            entries,
            quadrants: quadrant_descriptors(self.meta.quadrants()),
            rings: ring_descriptors(self.meta.rings()),
            changes,
        })
    }
}
