//! Snapshot file parsing and validation
//!
//! A snapshot file is YAML with a single `technologies:` list:
//!
//! ```yaml
//! technologies:
//!   - name: Go
//!     ring: Adopt
//!     quadrant: Languages
//!     description: Fast compiled language
//! ```
//!
//! Membership checks are case-sensitive on a ring or quadrant name or alias.

use crate::discovery::{discover_snapshots, snapshot_date};
use crate::error::{SnapshotError, ValidationError};
use radar_core::{Meta, Snapshot, Technology};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    technologies: Vec<Technology>,
}

fn parse_file(path: &Path) -> Result<Vec<Technology>, SnapshotError> {
    let source = std::fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file: SnapshotFile =
        serde_yaml::from_str(&source).map_err(|source| SnapshotError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(file.technologies)
}

fn check_membership(tech: &Technology, meta: &Meta) -> Result<(), ValidationError> {
    if !meta.is_valid_ring(&tech.ring) {
        return Err(ValidationError::UnknownRing {
            technology: tech.name.clone(),
            ring: tech.ring.clone(),
        });
    }
    if !meta.is_valid_quadrant(&tech.quadrant) {
        return Err(ValidationError::UnknownQuadrant {
            technology: tech.name.clone(),
            quadrant: tech.quadrant.clone(),
        });
    }
    Ok(())
}

fn check_required(position: usize, tech: &Technology) -> Result<(), ValidationError> {
    if tech.name.is_empty() {
        return Err(ValidationError::MissingName { position });
    }
    for (field, value) in [
        ("ring", &tech.ring),
        ("quadrant", &tech.quadrant),
        ("description", &tech.description),
    ] {
        if value.is_empty() {
            return Err(ValidationError::MissingField {
                technology: tech.name.clone(),
                field,
            });
        }
    }
    Ok(())
}

fn check_unique<'a>(
    seen: &mut HashSet<&'a str>,
    tech: &'a Technology,
) -> Result<(), ValidationError> {
    if seen.insert(tech.name.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::DuplicateName {
            technology: tech.name.clone(),
        })
    }
}

/// Read one snapshot file
///
/// The snapshot date is the file stem. Entries must be named, unique and use
/// configured rings and quadrants.
///
/// # Errors
/// Returns error with the file path if reading, parsing or validation fails
pub fn read_snapshot(path: &Path, meta: &Meta) -> Result<Snapshot, SnapshotError> {
    let technologies = parse_file(path)?;

    let mut seen = HashSet::new();
    for (i, tech) in technologies.iter().enumerate() {
        if tech.name.is_empty() {
            return Err(SnapshotError::invalid(
                path,
                ValidationError::MissingName { position: i + 1 },
            ));
        }
        check_membership(tech, meta)
            .and_then(|()| check_unique(&mut seen, tech))
            .map_err(|e| SnapshotError::invalid(path, e))?;
    }

    let snapshot = Snapshot::new(snapshot_date(path), technologies);
    debug!(
        path = %path.display(),
        date = %snapshot.date,
        technologies = snapshot.technologies.len(),
        "read snapshot"
    );
    Ok(snapshot)
}

/// Discover and read every snapshot in `input_dir`, oldest first
///
/// # Errors
/// Returns the first discovery or per-file error
pub fn read_snapshots(input_dir: &Path, meta: &Meta) -> Result<Vec<Snapshot>, SnapshotError> {
    discover_snapshots(input_dir, meta)?
        .iter()
        .map(|path| read_snapshot(path, meta))
        .collect()
}

/// Strict validation of one snapshot file
///
/// On top of [`read_snapshot`], requires a non-empty list and a name, ring,
/// quadrant and description on every entry.
///
/// # Errors
/// Returns the first problem found, naming the entry by position or name
pub fn validate_snapshot_file(path: &Path, meta: &Meta) -> Result<Snapshot, SnapshotError> {
    let technologies = parse_file(path)?;
    if technologies.is_empty() {
        return Err(SnapshotError::invalid(path, ValidationError::Empty));
    }

    let mut seen = HashSet::new();
    for (i, tech) in technologies.iter().enumerate() {
        check_required(i + 1, tech)
            .and_then(|()| check_membership(tech, meta))
            .and_then(|()| check_unique(&mut seen, tech))
            .map_err(|e| SnapshotError::invalid(path, e))?;
    }

    Ok(Snapshot::new(snapshot_date(path), technologies))
}
