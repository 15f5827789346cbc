//! Error types for the filesystem collaborators
//!
//! - Meta: loading the radar configuration
//! - Discovery: listing the input directory
//! - Validation: content rules on one parsed snapshot
//! - Snapshot: reading, parsing and validating one snapshot file

use radar_core::ConfigError;
use std::path::PathBuf;

/// Errors loading the radar configuration
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// Meta file exists but could not be read
    #[error("error reading meta file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Meta file is not valid YAML of the expected shape
    #[error("error parsing meta YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Loaded values are unusable
    #[error("{0}")]
    Config(#[from] ConfigError),
}

/// Errors listing snapshot files
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// Input directory could not be read
    #[error("error reading directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File-name pattern is unusable
    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl DiscoveryError {
    /// Create directory read error for path
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}

/// Content rule violated by a snapshot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No technologies listed
    #[error("no technologies found in file")]
    Empty,

    /// Technology without a name, by one-based position
    #[error("technology #{position} is missing 'name' field")]
    MissingName { position: usize },

    /// Required field left empty
    #[error("technology '{technology}' is missing '{field}' field")]
    MissingField {
        technology: String,
        field: &'static str,
    },

    /// Ring not in the configured vocabulary
    #[error("technology '{technology}' has invalid ring '{ring}'")]
    UnknownRing { technology: String, ring: String },

    /// Quadrant not in the configured vocabulary
    #[error("technology '{technology}' has invalid quadrant '{quadrant}'")]
    UnknownQuadrant {
        technology: String,
        quadrant: String,
    },

    /// Name listed more than once
    #[error("technology '{technology}' is listed more than once")]
    DuplicateName { technology: String },
}

/// Errors loading one snapshot file
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// IO error during file read
    #[error("error reading file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML syntax or shape error
    #[error("error parsing YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Parsed content failed validation
    #[error("validation error in file {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// Directory listing failed
    #[error("{0}")]
    Discovery(#[from] DiscoveryError),
}

impl SnapshotError {
    /// Create validation error for path
    pub fn invalid(path: impl Into<PathBuf>, source: ValidationError) -> Self {
        Self::Invalid {
            path: path.into(),
            source,
        }
    }
}
