//! Radar coordinate mapper
//!
//! Resolves classified technologies into ring × quadrant coordinates with a
//! movement code. Tombstones never reach the coordinate plane.

use crate::error::MappingError;
use crate::meta::{Category, Meta, Quadrant, Ring};
use crate::technology::{Change, Technology};
use serde::{Serialize, Serializer};

/// Movement of a technology for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementCode {
    /// Same ring as before
    Unchanged,
    /// Moved to an outer ring
    Deprecated,
    /// Moved to an inner ring
    Improved,
    /// Not in the previous snapshot
    New,
}

impl MovementCode {
    /// Numeric value consumed by the radar script
    #[inline]
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Self::Unchanged => 0,
            Self::Deprecated => -1,
            Self::Improved => 1,
            Self::New => 2,
        }
    }
}

impl Serialize for MovementCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

/// One blip on the radar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarEntry {
    /// Quadrant position
    pub quadrant: usize,
    /// Ring position (0 = innermost)
    pub ring: usize,
    /// Movement code
    pub moved: MovementCode,
    /// Technology name
    pub label: String,
    /// Link target, empty unless links are requested
    pub link: String,
    /// Highlight flag (always false on generation)
    pub active: bool,
    /// Technology description
    pub description: String,
}

fn category_index<C: Category>(name: &str, categories: &[C]) -> Option<usize> {
    categories.iter().position(|c| c.matches(name))
}

/// Position of the quadrant matching `name` (name or alias, any case)
#[inline]
#[must_use]
pub fn quadrant_index(name: &str, quadrants: &[Quadrant]) -> Option<usize> {
    category_index(name, quadrants)
}

/// Position of the ring matching `name` (name or alias, any case)
#[inline]
#[must_use]
pub fn ring_index(name: &str, rings: &[Ring]) -> Option<usize> {
    category_index(name, rings)
}

fn resolve_ring(tech: &Technology, ring: &str, rings: &[Ring]) -> Result<usize, MappingError> {
    ring_index(ring, rings).ok_or_else(|| MappingError::unknown_ring(&tech.name, ring))
}

/// Movement code of a classified technology
///
/// A moved entry whose ring position did not change (an alias swap, say)
/// is reported as [`MovementCode::Deprecated`].
///
/// # Errors
/// Returns error if a moved entry references a ring missing from `rings`
pub fn movement_code(tech: &Technology, rings: &[Ring]) -> Result<MovementCode, MappingError> {
    match &tech.change {
        Change::New => Ok(MovementCode::New),
        Change::Moved { previous_ring } => {
            let current = resolve_ring(tech, &tech.ring, rings)?;
            let previous = resolve_ring(tech, previous_ring, rings)?;
            Ok(if current < previous {
                MovementCode::Improved
            } else {
                MovementCode::Deprecated
            })
        }
        Change::Unchanged | Change::Deleted => Ok(MovementCode::Unchanged),
    }
}

/// Project technologies onto radar entries
///
/// Tombstones are dropped; output order follows input order. With
/// `include_links` each entry links to `/<quadrant>/<name>/`.
///
/// # Errors
/// Returns error on the first ring or quadrant that cannot be resolved
pub fn to_entries(
    technologies: &[Technology],
    meta: &Meta,
    include_links: bool,
) -> Result<Vec<RadarEntry>, MappingError> {
    technologies
        .iter()
        .filter(|t| !t.is_deleted())
        .map(|tech| {
            let quadrant = quadrant_index(&tech.quadrant, meta.quadrants())
                .ok_or_else(|| MappingError::unknown_quadrant(&tech.name, &tech.quadrant))?;
            let ring = resolve_ring(tech, &tech.ring, meta.rings())?;
            let moved = movement_code(tech, meta.rings())?;

            let link = if include_links {
                format!("/{}/{}/", tech.quadrant, tech.name)
            } else {
                String::new()
            };

            Ok(RadarEntry {
                quadrant,
                ring,
                moved,
                label: tech.name.clone(),
                link,
                active: false,
                description: tech.description.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{default_rings, Quadrant};
    use pretty_assertions::assert_eq;

    fn meta() -> Meta {
        Meta::new(
            "Test",
            "Test",
            vec![
                Quadrant::new("Languages", "languages"),
                Quadrant::new("Frameworks", "frameworks"),
                Quadrant::new("Infrastructure", "infrastructure"),
                Quadrant::new("Techniques", "techniques"),
            ],
            default_rings(),
        )
        .unwrap()
    }

    fn moved(name: &str, from: &str, to: &str) -> Technology {
        Technology::new(name, to, "Frameworks", "").with_change(Change::Moved {
            previous_ring: from.to_string(),
        })
    }

    #[test]
    fn ring_index_matches_name_or_alias_any_case() {
        let rings = default_rings();
        assert_eq!(ring_index("Adopt", &rings), Some(0));
        assert_eq!(ring_index("trial", &rings), Some(1));
        assert_eq!(ring_index("ASSESS", &rings), Some(2));
        assert_eq!(ring_index("Hold", &rings), Some(3));
        assert_eq!(ring_index("Unknown", &rings), None);
    }

    #[test]
    fn quadrant_index_resolves() {
        let meta = meta();
        assert_eq!(quadrant_index("Languages", meta.quadrants()), Some(0));
        assert_eq!(quadrant_index("infrastructure", meta.quadrants()), Some(2));
        assert_eq!(quadrant_index("Nowhere", meta.quadrants()), None);
    }

    #[test]
    fn movement_codes() {
        let rings = default_rings();
        let new = Technology::new("Go", "Adopt", "Languages", "").with_change(Change::New);

        assert_eq!(movement_code(&new, &rings), Ok(MovementCode::New));
        assert_eq!(movement_code(&moved("React", "Trial", "Adopt"), &rings), Ok(MovementCode::Improved));
        assert_eq!(movement_code(&moved("React", "Adopt", "Hold"), &rings), Ok(MovementCode::Deprecated));
        assert_eq!(movement_code(&moved("React", "adopt", "Adopt"), &rings), Ok(MovementCode::Deprecated));
        assert_eq!(
            movement_code(&Technology::new("Go", "Adopt", "Languages", ""), &rings),
            Ok(MovementCode::Unchanged)
        );
    }

    #[test]
    fn movement_code_rejects_unknown_previous_ring() {
        let err = movement_code(&moved("React", "Someday", "Adopt"), &default_rings()).unwrap_err();
        assert_eq!(err, MappingError::unknown_ring("React", "Someday"));
    }

    #[test]
    fn movement_code_values() {
        assert_eq!(MovementCode::Unchanged.value(), 0);
        assert_eq!(MovementCode::Deprecated.value(), -1);
        assert_eq!(MovementCode::Improved.value(), 1);
        assert_eq!(MovementCode::New.value(), 2);
        assert_eq!(serde_json::to_string(&MovementCode::Deprecated).unwrap(), "-1");
    }

    #[test]
    fn entries_without_links() {
        let techs = vec![
            Technology::new("Go", "Adopt", "Languages", "Go language"),
            Technology::new("React", "Trial", "Frameworks", "React library").with_change(Change::New),
        ];
        let entries = to_entries(&techs, &meta(), false).unwrap();

        assert_eq!(
            entries,
            vec![
                RadarEntry {
                    quadrant: 0,
                    ring: 0,
                    moved: MovementCode::Unchanged,
                    label: "Go".to_string(),
                    link: String::new(),
                    active: false,
                    description: "Go language".to_string(),
                },
                RadarEntry {
                    quadrant: 1,
                    ring: 1,
                    moved: MovementCode::New,
                    label: "React".to_string(),
                    link: String::new(),
                    active: false,
                    description: "React library".to_string(),
                },
            ]
        );
    }

    #[test]
    fn entries_with_links() {
        let techs = vec![Technology::new("Go", "Adopt", "Languages", "")];
        let entries = to_entries(&techs, &meta(), true).unwrap();
        assert_eq!(entries[0].link, "/Languages/Go/");
    }

    #[test]
    fn moved_entry_is_improved() {
        let entries = to_entries(&[moved("React", "Trial", "Adopt")], &meta(), false).unwrap();
        assert_eq!(entries[0].ring, 0);
        assert_eq!(entries[0].quadrant, 1);
        assert_eq!(entries[0].moved, MovementCode::Improved);
    }

    #[test]
    fn tombstones_are_skipped() {
        let techs = vec![
            Technology::new("Go", "Adopt", "Languages", ""),
            Technology::new("Angular", "Hold", "Frameworks", "").with_change(Change::Deleted),
            Technology::new("React", "Trial", "Frameworks", ""),
        ];
        let entries = to_entries(&techs, &meta(), false).unwrap();

        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Go", "React"]);
    }

    #[test]
    fn only_tombstones_yield_nothing() {
        let techs = vec![
            Technology::new("Angular", "Hold", "Frameworks", "").with_change(Change::Deleted),
            Technology::new("Backbone", "Hold", "Frameworks", "").with_change(Change::Deleted),
        ];
        assert!(to_entries(&techs, &meta(), false).unwrap().is_empty());
        assert!(to_entries(&[], &meta(), false).unwrap().is_empty());
    }

    #[test]
    fn unresolved_quadrant_is_an_error() {
        let techs = vec![Technology::new("Go", "Adopt", "Nowhere", "")];
        let err = to_entries(&techs, &meta(), false).unwrap_err();
        assert_eq!(err, MappingError::unknown_quadrant("Go", "Nowhere"));
    }

    #[test]
    fn entry_json_shape() {
        let techs = vec![Technology::new("Go", "Adopt", "Languages", "Fast")];
        let entries = to_entries(&techs, &meta(), false).unwrap();
        let json = serde_json::to_value(&entries).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "quadrant": 0,
                "ring": 0,
                "moved": 0,
                "label": "Go",
                "link": "",
                "active": false,
                "description": "Fast"
            }])
        );
    }
}
