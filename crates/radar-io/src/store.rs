//! Filesystem artifact store
//!
//! Artifacts live at `<output_dir>/<date>.html`.

use crate::discovery::{discover_snapshots, snapshot_date};
use crate::error::DiscoveryError;
use chrono::{DateTime, Local};
use radar_core::{ArtifactStore, Meta, SnapshotDate, StoreError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Artifact file extension
pub const ARTIFACT_EXTENSION: &str = "html";

/// Path of the artifact for `date` under `output_dir`
#[must_use]
pub fn artifact_path(output_dir: &Path, date: &SnapshotDate) -> PathBuf {
    output_dir.join(format!("{}.{ARTIFACT_EXTENSION}", date.raw()))
}

/// Store writing one HTML document per snapshot
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    output_dir: PathBuf,
}

impl FsArtifactStore {
    /// Create store rooted at `output_dir`
    ///
    /// The directory is created on first write.
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Output directory
    #[inline]
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ArtifactStore for FsArtifactStore {
    fn exists(&self, date: &SnapshotDate) -> Result<bool, StoreError> {
        let path = artifact_path(&self.output_dir, date);
        path.try_exists()
            .map_err(|e| StoreError::io_error(&path, e))
    }

    fn write(&mut self, date: &SnapshotDate, document: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.output_dir)
            .map_err(|e| StoreError::io_error(&self.output_dir, e))?;
        let path = artifact_path(&self.output_dir, date);
        std::fs::write(&path, document).map_err(|e| StoreError::io_error(&path, e))?;
        debug!(path = %path.display(), bytes = document.len(), "wrote artifact");
        Ok(())
    }
}

/// Render status of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    /// Artifact exists, last modified at the given time
    Rendered(DateTime<Local>),
    /// No artifact yet
    Missing,
    /// Status could not be determined
    Unknown(String),
}

/// Snapshot with the status of its artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedState {
    /// Snapshot date
    pub date: SnapshotDate,
    /// Snapshot source file
    pub source: PathBuf,
    /// Expected artifact path
    pub artifact: PathBuf,
    /// Artifact status
    pub status: ArtifactStatus,
}

fn artifact_status(path: &Path) -> ArtifactStatus {
    match std::fs::metadata(path) {
        Ok(metadata) => match metadata.modified() {
            Ok(modified) => ArtifactStatus::Rendered(DateTime::<Local>::from(modified)),
            Err(e) => ArtifactStatus::Unknown(e.to_string()),
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => ArtifactStatus::Missing,
        Err(e) => ArtifactStatus::Unknown(e.to_string()),
    }
}

/// Render status of every discovered snapshot, oldest first
///
/// # Errors
/// Returns error if the input directory cannot be listed
pub fn rendered_state(
    input_dir: &Path,
    output_dir: &Path,
    meta: &Meta,
) -> Result<Vec<RenderedState>, DiscoveryError> {
    Ok(discover_snapshots(input_dir, meta)?
        .into_iter()
        .map(|source| {
            let date = snapshot_date(&source);
            let artifact = artifact_path(output_dir, &date);
            let status = artifact_status(&artifact);
            RenderedState {
                date,
                source,
                artifact,
                status,
            }
        })
        .collect())
}
