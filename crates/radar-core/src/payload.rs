//! Render payload handed to the template collaborator

use crate::changes::ChangesSummary;
use crate::error::PayloadError;
use crate::mapper::RadarEntry;
use crate::meta::{Quadrant, Ring};
use serde::Serialize;

/// Ring colors by position, innermost first
pub const RING_PALETTE: [&str; 4] = ["#93c47d", "#93d2c2", "#fbdb84", "#efafa9"];

/// Color for rings beyond the palette
pub const DEFAULT_RING_COLOR: &str = "#ddd";

/// Quadrant as seen by the radar script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuadrantDescriptor {
    pub name: String,
    pub id: String,
}

/// Ring as seen by the radar script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RingDescriptor {
    pub name: String,
    pub color: String,
    pub id: String,
}

/// Quadrant descriptors with one-based `q<N>` ids
#[must_use]
pub fn quadrant_descriptors(quadrants: &[Quadrant]) -> Vec<QuadrantDescriptor> {
    quadrants
        .iter()
        .enumerate()
        .map(|(i, q)| QuadrantDescriptor {
            name: q.name.clone(),
            id: format!("q{}", i + 1),
        })
        .collect()
}

/// Ring descriptors: upper-cased name, alias id, palette color
#[must_use]
pub fn ring_descriptors(rings: &[Ring]) -> Vec<RingDescriptor> {
    rings
        .iter()
        .enumerate()
        .map(|(i, r)| RingDescriptor {
            name: r.name.to_uppercase(),
            color: RING_PALETTE
                .get(i)
                .copied()
                .unwrap_or(DEFAULT_RING_COLOR)
                .to_string(),
            id: r.alias.clone(),
        })
        .collect()
}

/// Everything the renderer needs for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPayload {
    /// Radar title
    pub title: String,
    /// Radar description
    pub description: String,
    /// Raw snapshot identifier (artifact name)
    pub snapshot: String,
    /// Human-readable date
    pub date: String,
    /// Generator version
    pub version: String,
    /// Generation timestamp
    pub generated_at: String,
    /// Blips
    pub entries: Vec<RadarEntry>,
    /// Quadrant descriptors
    pub quadrants: Vec<QuadrantDescriptor>,
    /// Ring descriptors
    pub rings: Vec<RingDescriptor>,
    /// Changes section, absent when omitted or empty
    pub changes: Option<ChangesSummary>,
}

impl RenderPayload {
    /// Entries as a JSON array
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn entries_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Quadrant descriptors as a JSON array
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn quadrants_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(&self.quadrants)?)
    }

    /// Ring descriptors as a JSON array
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn rings_json(&self) -> Result<String, PayloadError> {
        Ok(serde_json::to_string(&self.rings)?)
    }
}
