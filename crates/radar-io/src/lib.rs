//! Tech Radar IO
//!
//! Filesystem side of a generation run:
//!
//! - [`load_meta`]: `meta.yaml` into a [`radar_core::Meta`], with defaults
//! - [`discover_snapshots`] / [`read_snapshots`]: dated YAML inventories
//! - [`validate_snapshot_file`]: strict content checks for `validate`
//! - [`FsArtifactStore`]: one HTML document per snapshot
//! - [`rendered_state`]: which snapshots already have an artifact

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod discovery;
pub mod error;
pub mod meta;
pub mod snapshot;
pub mod store;

pub use discovery::{discover_snapshots, snapshot_date};
pub use error::{DiscoveryError, MetaError, SnapshotError, ValidationError};
pub use meta::{load_meta, meta_path, parse_meta, META_FILE_NAME};
pub use snapshot::{read_snapshot, read_snapshots, validate_snapshot_file};
pub use store::{artifact_path, rendered_state, ArtifactStatus, FsArtifactStore, RenderedState};
