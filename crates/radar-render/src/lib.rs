//! Tech Radar Render
//!
//! HTML rendering for radar snapshots. [`HandlebarsRenderer`] implements
//! [`radar_core::Renderer`] over the embedded default template or a
//! user-supplied one; [`export_template`] writes the default out as a
//! starting point for customization.
//!
//! The default page loads d3 and the radar visualization script from a CDN.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod context;
pub mod error;
pub mod renderer;

pub use context::{escape_script, script_json, ChangeContext, TemplateContext};
pub use error::TemplateError;
pub use renderer::HandlebarsRenderer;

use std::path::Path;
use tracing::info;

/// Embedded default page template
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/radar.html");

/// Description modal script inlined into every page
pub const DESCRIPTION_JS: &str = include_str!("../templates/show_description.js");

/// Write the embedded default template to `path`
///
/// # Errors
/// Returns error if the file cannot be written
pub fn export_template(path: &Path) -> Result<(), TemplateError> {
    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|source| TemplateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "exported default template");
    Ok(())
}
