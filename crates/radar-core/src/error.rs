//! Error types for the radar core
//!
//! Classification itself is total. Errors only arise from:
//! - Configuration construction (empty axes, bad file-name pattern)
//! - Sequencing preconditions on the snapshot list
//! - Coordinate resolution for names that escaped upstream validation
//! - The render and artifact-store boundary

use std::path::PathBuf;

/// Errors building a [`Meta`](crate::Meta)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Ring vocabulary is empty
    #[error("configuration has no rings")]
    EmptyRings,

    /// Quadrant vocabulary is empty
    #[error("configuration has no quadrants")]
    EmptyQuadrants,

    /// File-name pattern is not a valid regular expression
    #[error("invalid file name pattern '{pattern}': {message}")]
    InvalidFileNamePattern { pattern: String, message: String },
}

/// Snapshot list violates the chronological precondition
#[derive(Debug, thiserror::Error)]
pub enum SequencingError {
    /// Two snapshots resolve to the same date
    #[error("snapshots '{first}' and '{second}' share the same date")]
    DuplicateDate { first: String, second: String },
}

/// A ring or quadrant name could not be resolved against the vocabulary
///
/// Upstream validation is expected to make this unreachable; seeing it
/// means a snapshot was handed to the core without being validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// Ring name unknown to the configuration
    #[error("technology '{technology}' references unknown ring '{ring}'")]
    UnknownRing { technology: String, ring: String },

    /// Quadrant name unknown to the configuration
    #[error("technology '{technology}' references unknown quadrant '{quadrant}'")]
    UnknownQuadrant { technology: String, quadrant: String },
}

impl MappingError {
    /// Create unknown ring error
    pub fn unknown_ring(technology: impl Into<String>, ring: impl Into<String>) -> Self {
        Self::UnknownRing {
            technology: technology.into(),
            ring: ring.into(),
        }
    }

    /// Create unknown quadrant error
    pub fn unknown_quadrant(technology: impl Into<String>, quadrant: impl Into<String>) -> Self {
        Self::UnknownQuadrant {
            technology: technology.into(),
            quadrant: quadrant.into(),
        }
    }
}

/// JSON projection of the render payload failed
#[derive(Debug, thiserror::Error)]
#[error("payload serialization failed: {0}")]
pub struct PayloadError(#[from] pub serde_json::Error);

/// The template collaborator rejected a payload
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template could not be compiled
    #[error("template error: {0}")]
    Template(String),

    /// Template execution failed for a payload
    #[error("render failed for {date}: {message}")]
    Execute { date: String, message: String },

    /// Payload could not be projected for the template
    #[error("{0}")]
    Payload(#[from] PayloadError),
}

impl RenderError {
    /// Create execution error for a snapshot date
    pub fn execute(date: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Execute {
            date: date.into(),
            message: message.into(),
        }
    }
}

/// Errors at the artifact store boundary
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error checking or writing an artifact
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined generation error; any variant aborts the whole run
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("sequencing error: {0}")]
    Sequencing(#[from] SequencingError),

    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type alias for generation runs
pub type GenerateResult<T> = Result<T, GenerateError>;
