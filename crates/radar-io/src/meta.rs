//! Meta file loading
//!
//! Reads `meta.yaml` into a [`Meta`]. A missing or unparsable file falls back
//! to the built-in defaults; fields absent from the file default one by one.

use crate::error::MetaError;
use radar_core::meta::{default_quadrants, default_rings, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use radar_core::{Meta, Quadrant, Ring};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Conventional meta file name inside the input directory
pub const META_FILE_NAME: &str = "meta.yaml";

/// Ring or quadrant as written in the meta file
#[derive(Debug, Deserialize)]
struct CategoryEntry {
    name: String,
    #[serde(default)]
    alias: Option<String>,
}

impl CategoryEntry {
    fn into_parts(self) -> (String, String) {
        let alias = self.alias.unwrap_or_else(|| self.name.to_lowercase());
        (self.name, alias)
    }
}

/// On-disk shape of `meta.yaml`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MetaFile {
    title: Option<String>,
    description: Option<String>,
    quadrants: Vec<CategoryEntry>,
    rings: Vec<CategoryEntry>,
    #[serde(alias = "fileNamePattern")]
    file_name_pattern: Option<String>,
}

impl MetaFile {
    fn into_meta(self) -> Result<Meta, MetaError> {
        let quadrants = if self.quadrants.is_empty() {
            default_quadrants()
        } else {
            self.quadrants
                .into_iter()
                .map(|q| {
                    let (name, alias) = q.into_parts();
                    Quadrant::new(name, alias)
                })
                .collect()
        };

        let rings = if self.rings.is_empty() {
            default_rings()
        } else {
            self.rings
                .into_iter()
                .map(|r| {
                    let (name, alias) = r.into_parts();
                    Ring::new(name, alias)
                })
                .collect()
        };

        let meta = Meta::new(
            self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            self.description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            quadrants,
            rings,
        )?;

        match self.file_name_pattern {
            Some(pattern) => Ok(meta.with_file_name_pattern(pattern)?),
            None => Ok(meta),
        }
    }
}

/// Resolve which meta file to read
///
/// An explicit path wins; otherwise `<input_dir>/meta.yaml`.
#[must_use]
pub fn meta_path(explicit: Option<&Path>, input_dir: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| input_dir.map(|dir| dir.join(META_FILE_NAME)))
}

/// Parse meta YAML text
///
/// Empty text yields the defaults.
///
/// # Errors
/// Returns error if the YAML is malformed or its values are unusable
pub fn parse_meta(source: &str) -> Result<Meta, MetaError> {
    let file: MetaFile = if source.trim().is_empty() {
        MetaFile::default()
    } else {
        serde_yaml::from_str(source)?
    };
    file.into_meta()
}

/// Load the radar configuration
///
/// # Errors
/// Returns error if the file exists but cannot be read, or if its values
/// are unusable (such as an invalid file-name pattern)
pub fn load_meta(explicit: Option<&Path>, input_dir: Option<&Path>) -> Result<Meta, MetaError> {
    let Some(path) = meta_path(explicit, input_dir) else {
        debug!("no meta file configured, using defaults");
        return Ok(Meta::default());
    };

    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "meta file not found, using defaults");
            return Ok(Meta::default());
        }
        Err(source) => return Err(MetaError::Read { path, source }),
    };

    match parse_meta(&source) {
        Ok(meta) => {
            debug!(
                path = %path.display(),
                rings = meta.rings().len(),
                quadrants = meta.quadrants().len(),
                "loaded meta"
            );
            Ok(meta)
        }
        Err(MetaError::Parse(e)) => {
            warn!(path = %path.display(), error = %e, "meta file unparsable, using defaults");
            Ok(Meta::default())
        }
        Err(e) => Err(e),
    }
}
