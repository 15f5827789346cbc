//! Technologies and snapshots
//!
//! A [`Snapshot`] is one dated inventory parsed from one input file. Change
//! markers on each [`Technology`] are transient: they are never read from or
//! written to YAML and are set only by [`diff`](crate::diff::diff).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Change of a technology relative to the previous snapshot
///
/// Modelled as one enum so that at most one classification holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Change {
    /// Present before with the same ring (or not yet diffed)
    #[default]
    Unchanged,
    /// Absent from the previous snapshot
    New,
    /// Present before in a different ring
    Moved {
        /// Ring in the previous snapshot
        previous_ring: String,
    },
    /// Tombstone: present before, absent now
    Deleted,
}

/// A single technology entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Technology {
    /// Unique name within a snapshot
    #[serde(default)]
    pub name: String,
    /// Ring name or alias
    #[serde(default)]
    pub ring: String,
    /// Quadrant name or alias
    #[serde(default)]
    pub quadrant: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Optional additional info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Diff classification, set by the diff engine
    #[serde(skip)]
    pub change: Change,
}

impl Technology {
    /// Create technology with no change marker
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        ring: impl Into<String>,
        quadrant: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ring: ring.into(),
            quadrant: quadrant.into(),
            description: description.into(),
            info: None,
            change: Change::Unchanged,
        }
    }

    /// Attach info text
    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Set change marker
    #[must_use]
    pub fn with_change(mut self, change: Change) -> Self {
        self.change = change;
        self
    }

    /// New since the previous snapshot
    #[inline]
    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self.change, Change::New)
    }

    /// Moved between rings since the previous snapshot
    #[inline]
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self.change, Change::Moved { .. })
    }

    /// Tombstone for a removed technology
    #[inline]
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self.change, Change::Deleted)
    }

    /// Changed in any way
    #[inline]
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !matches!(self.change, Change::Unchanged)
    }

    /// Ring in the previous snapshot, populated for moved entries and
    /// tombstones (whose ring is preserved from the previous period)
    #[inline]
    #[must_use]
    pub fn previous_ring(&self) -> Option<&str> {
        match &self.change {
            Change::Moved { previous_ring } => Some(previous_ring),
            Change::Deleted => Some(&self.ring),
            _ => None,
        }
    }
}

/// Date identifier of a snapshot
///
/// Keeps the raw file stem (used to name artifacts) and, when the stem is a
/// calendar date (`YYYYMMDD` or `YYYY-MM-DD`), the parsed date used for
/// ordering. Parsed dates order chronologically and sort before unparsed
/// stems, which order lexically among themselves.
#[derive(Debug, Clone)]
pub struct SnapshotDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl SnapshotDate {
    /// Parse a snapshot identifier
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = ["%Y%m%d", "%Y-%m-%d"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&raw, fmt).ok());
        Self { raw, parsed }
    }

    /// Raw identifier
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Parsed calendar date, if any
    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        self.parsed
    }

    /// Human-readable form: `YYYY-MM-DD` for calendar dates, raw otherwise
    #[must_use]
    pub fn formatted(&self) -> String {
        match self.parsed {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.raw.clone(),
        }
    }
}

impl From<&str> for SnapshotDate {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for SnapshotDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for SnapshotDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.parsed, other.parsed) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for SnapshotDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SnapshotDate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SnapshotDate {}

/// One dated inventory of technologies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Date identifier
    pub date: SnapshotDate,
    /// Entries in file order, followed by tombstones once diffed
    pub technologies: Vec<Technology>,
}

impl Snapshot {
    /// Create snapshot
    #[must_use]
    pub fn new(date: impl Into<SnapshotDate>, technologies: Vec<Technology>) -> Self {
        Self {
            date: date.into(),
            technologies,
        }
    }

    /// Entries that are not tombstones
    pub fn live(&self) -> impl Iterator<Item = &Technology> {
        self.technologies.iter().filter(|t| !t.is_deleted())
    }
}
