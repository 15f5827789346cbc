//! Handlebars renderer

use crate::context::TemplateContext;
use crate::error::TemplateError;
use crate::{DEFAULT_TEMPLATE, DESCRIPTION_JS};
use handlebars::Handlebars;
use radar_core::{RenderError, RenderPayload, Renderer};
use std::path::Path;
use tracing::debug;

const TEMPLATE_NAME: &str = "radar";

/// Renders payloads through one compiled Handlebars template
#[derive(Debug, Clone)]
pub struct HandlebarsRenderer {
    registry: Handlebars<'static>,
}

impl HandlebarsRenderer {
    /// Compile the embedded default template
    ///
    /// # Errors
    /// Returns error if the embedded template does not compile
    pub fn from_default() -> Result<Self, TemplateError> {
        Self::from_source(DEFAULT_TEMPLATE)
    }

    /// Compile a template file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not compile
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded custom template");
        Self::from_source(&source)
    }

    /// Compile template source
    ///
    /// # Errors
    /// Returns error if the source does not compile
    pub fn from_source(source: &str) -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(TEMPLATE_NAME, source)
            .map_err(|e| TemplateError::parse(TEMPLATE_NAME, e.to_string()))?;
        Ok(Self { registry })
    }

    /// Use the embedded template unless a custom file is given
    ///
    /// # Errors
    /// Returns error if the chosen template cannot be loaded
    pub fn load(custom: Option<&Path>) -> Result<Self, TemplateError> {
        match custom {
            Some(path) => Self::from_file(path),
            None => Self::from_default(),
        }
    }
}

impl Renderer for HandlebarsRenderer {
    fn render(&self, payload: &RenderPayload) -> Result<String, RenderError> {
        let context = TemplateContext::new(payload, DESCRIPTION_JS)?;
        self.registry
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| RenderError::execute(&payload.snapshot, e.to_string()))
    }
}
