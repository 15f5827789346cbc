//! Changes summary builder
//!
//! Turns the classification of one snapshot into structured rows. Layout is
//! left to the renderer.

use crate::meta::Meta;
use crate::technology::{Change, Technology};
use serde::{Serialize, Serializer};
use std::fmt;

/// Status of a changed technology
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Added in this snapshot
    New,
    /// Moved between rings
    Moved {
        /// Previous ring
        from: String,
        /// Current ring
        to: String,
    },
    /// Removed in this snapshot
    Deleted {
        /// Ring it was removed from
        from: String,
    },
}

impl ChangeStatus {
    /// CSS class used by the default template
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::New => "status-new",
            Self::Moved { .. } => "status-moved",
            Self::Deleted { .. } => "status-deleted",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => f.write_str("NEW"),
            Self::Moved { from, to } => write!(f, "MOVED: {from} -> {to}"),
            Self::Deleted { from } => write!(f, "DELETED from {from}"),
        }
    }
}

impl Serialize for ChangeStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the changes summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRow {
    /// Technology name
    pub name: String,
    /// Quadrant display name
    pub quadrant: String,
    /// Status label
    pub status: ChangeStatus,
    /// Technology description
    pub description: String,
}

/// Changes of one snapshot, never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangesSummary {
    rows: Vec<ChangeRow>,
}

impl ChangesSummary {
    /// Rows in snapshot order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[ChangeRow] {
        &self.rows
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows; a built summary always has at least one
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build the changes summary, or `None` when nothing changed
#[must_use]
pub fn build_changes_summary(technologies: &[Technology], meta: &Meta) -> Option<ChangesSummary> {
    let rows: Vec<ChangeRow> = technologies
        .iter()
        .filter_map(|tech| {
            let status = match &tech.change {
                Change::Unchanged => return None,
                Change::New => ChangeStatus::New,
                Change::Moved { previous_ring } => ChangeStatus::Moved {
                    from: previous_ring.clone(),
                    to: tech.ring.clone(),
                },
                Change::Deleted => ChangeStatus::Deleted {
                    from: tech.ring.clone(),
                },
            };
            Some(ChangeRow {
                name: tech.name.clone(),
                quadrant: meta.quadrant_display_name(&tech.quadrant).to_string(),
                status,
                description: tech.description.clone(),
            })
        })
        .collect();

    if rows.is_empty() {
        None
    } else {
        Some(ChangesSummary { rows })
    }
}
