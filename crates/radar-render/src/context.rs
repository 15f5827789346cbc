//! Template context
//!
//! Field names are what templates see: `{{Title}}`, `{{{EntriesJSON}}}`,
//! `{{#each Changes}}` and so on. JSON fields are safe to inline in a
//! `<script>` element.

use radar_core::{ChangeRow, PayloadError, RenderPayload};
use serde::Serialize;

/// Make JSON text safe to inline inside `<script>`
///
/// `</` is escaped so a description cannot close the script element.
#[must_use]
pub fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

/// Serialize for inlining inside `<script>`
///
/// # Errors
/// Returns error if serialization fails
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, PayloadError> {
    Ok(escape_script(&serde_json::to_string(value)?))
}

/// One changes-table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeContext<'a> {
    /// Technology name
    pub name: &'a str,
    /// Quadrant display name
    pub quadrant: &'a str,
    /// Status label
    pub status: String,
    /// CSS class for the status cell
    pub class: &'static str,
    /// Technology description
    pub description: &'a str,
}

impl<'a> From<&'a ChangeRow> for ChangeContext<'a> {
    fn from(row: &'a ChangeRow) -> Self {
        Self {
            name: &row.name,
            quadrant: &row.quadrant,
            status: row.status.to_string(),
            class: row.status.css_class(),
            description: &row.description,
        }
    }
}

/// Values exposed to the template
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateContext<'a> {
    /// Radar title
    pub title: &'a str,
    /// Radar title as a script literal
    #[serde(rename = "TitleJSON")]
    pub title_json: String,
    /// Radar description
    pub description: &'a str,
    /// Human-readable snapshot date
    pub date: &'a str,
    /// Snapshot date as a script literal
    #[serde(rename = "DateJSON")]
    pub date_json: String,
    /// Raw snapshot identifier
    pub snapshot: &'a str,
    /// Generator version
    pub version: &'a str,
    /// Generation timestamp
    pub generated_at: &'a str,
    /// Entries array literal
    #[serde(rename = "EntriesJSON")]
    pub entries_json: String,
    /// Quadrant descriptors array literal
    #[serde(rename = "QuadrantsJSON")]
    pub quadrants_json: String,
    /// Ring descriptors array literal
    #[serde(rename = "RingsJSON")]
    pub rings_json: String,
    /// Description modal script
    #[serde(rename = "DescriptionJS")]
    pub description_js: &'static str,
    /// Changes rows, absent when there is no summary
    pub changes: Option<Vec<ChangeContext<'a>>>,
}

impl<'a> TemplateContext<'a> {
    /// Build the context for one payload
    ///
    /// # Errors
    /// Returns error if a JSON projection fails
    pub fn new(payload: &'a RenderPayload, description_js: &'static str) -> Result<Self, PayloadError> {
        Ok(Self {
            title: &payload.title,
            title_json: script_json(&payload.title)?,
            description: &payload.description,
            date: &payload.date,
            date_json: script_json(&payload.date)?,
            snapshot: &payload.snapshot,
            version: &payload.version,
            generated_at: &payload.generated_at,
            entries_json: escape_script(&payload.entries_json()?),
            quadrants_json: escape_script(&payload.quadrants_json()?),
            rings_json: escape_script(&payload.rings_json()?),
            description_js,
            changes: payload
                .changes
                .as_ref()
                .map(|summary| summary.rows().iter().map(ChangeContext::from).collect()),
        })
    }
}
