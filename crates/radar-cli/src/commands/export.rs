//! `export-template` command

use anyhow::{Context, Result};
use radar_render::export_template;
use std::io::Write;
use std::path::Path;

/// Write the embedded template to `path`
///
/// # Errors
/// Returns error if the file cannot be written
pub fn run(path: &Path, out: &mut impl Write) -> Result<()> {
    export_template(path).context("failed to export template")?;
    writeln!(out, "Template exported to {}", path.display())?;
    Ok(())
}
