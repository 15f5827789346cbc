//! Tech Radar Core
//!
//! Turns a chronological sequence of technology snapshots into render-ready
//! radar data, annotating each entry with how it changed since the
//! preceding snapshot.
//!
//! # Pipeline
//!
//! ```text
//! Snapshot[0..n] → diff (rolling, previous only) → to_entries ─┐
//!                                               → changes ────┴→ RenderPayload → Renderer
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use radar_core::prelude::*;
//!
//! let meta = Meta::default();
//! let mut store = MyStore::default();
//! let mut generator = Generator::new(&meta, &renderer, &mut store, GenerateOptions::default());
//! let report = generator.run(snapshots)?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod changes;
pub mod diff;
pub mod error;
pub mod generate;
pub mod mapper;
pub mod meta;
pub mod payload;
pub mod technology;

// Re-exports for convenience
pub use changes::{build_changes_summary, ChangeRow, ChangeStatus, ChangesSummary};
pub use diff::{diff, DiffStats};
pub use error::{
    ConfigError, GenerateError, GenerateResult, MappingError, PayloadError, RenderError,
    SequencingError, StoreError,
};
pub use generate::{
    order_snapshots, Action, ArtifactStore, GenerateOptions, GenerationReport, Generator,
    Renderer, SnapshotOutcome,
};
pub use mapper::{movement_code, quadrant_index, ring_index, to_entries, MovementCode, RadarEntry};
pub use meta::{Category, Meta, Quadrant, Ring};
pub use payload::{QuadrantDescriptor, RenderPayload, RingDescriptor};
pub use technology::{Change, Snapshot, SnapshotDate, Technology};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a generation run
    pub use crate::error::{GenerateError, RenderError, StoreError};
    pub use crate::generate::{ArtifactStore, GenerateOptions, GenerationReport, Generator, Renderer};
    pub use crate::meta::{Meta, Quadrant, Ring};
    pub use crate::payload::RenderPayload;
    pub use crate::technology::{Snapshot, SnapshotDate, Technology};
}
