//! Snapshot file discovery

use crate::error::DiscoveryError;
use radar_core::{ConfigError, Meta, SnapshotDate};
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Snapshot date of a file: its stem
#[must_use]
pub fn snapshot_date(path: &Path) -> SnapshotDate {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    SnapshotDate::parse(stem)
}

fn file_name_pattern(meta: &Meta) -> Result<Regex, ConfigError> {
    Regex::new(meta.file_name_pattern()).map_err(|e| ConfigError::InvalidFileNamePattern {
        pattern: meta.file_name_pattern().to_string(),
        message: e.to_string(),
    })
}

/// List snapshot files in `input_dir`, oldest first
///
/// A file qualifies when it is a regular `.yaml` file whose name matches the
/// meta file-name pattern.
///
/// # Errors
/// Returns error if the directory cannot be read
pub fn discover_snapshots(input_dir: &Path, meta: &Meta) -> Result<Vec<PathBuf>, DiscoveryError> {
    let pattern = file_name_pattern(meta)?;
    let entries =
        std::fs::read_dir(input_dir).map_err(|e| DiscoveryError::read_dir(input_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DiscoveryError::read_dir(input_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| pattern.is_match(name));
        if matches {
            files.push(path);
        } else {
            debug!(path = %path.display(), "ignoring file not matching snapshot pattern");
        }
    }

    files.sort_by(|a, b| {
        snapshot_date(a)
            .cmp(&snapshot_date(b))
            .then_with(|| a.file_name().cmp(&b.file_name()))
    });
    Ok(files)
}
