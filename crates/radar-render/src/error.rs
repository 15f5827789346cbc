//! Template loading errors

use std::path::PathBuf;

/// Errors obtaining, compiling or exporting a template
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Template file could not be read
    #[error("error reading template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template source does not compile
    #[error("error parsing template {name}: {message}")]
    Parse { name: String, message: String },

    /// Template could not be written out
    #[error("error writing template {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TemplateError {
    /// Create parse error for a named template
    pub fn parse(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl From<TemplateError> for radar_core::RenderError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e.to_string())
    }
}
