//! Snapshot diff engine
//!
//! Classifies each technology of a snapshot against the single preceding
//! snapshot and appends tombstones for technologies that disappeared.
//!
//! # Invariants
//! - Without a predecessor every entry is [`Change::New`] and no tombstones
//!   are produced
//! - Tombstones copy the previous-period record verbatim
//! - The lookup only considers live entries of the predecessor, so a
//!   tombstone is reported once and never resurrects as "unchanged"

use crate::technology::{Change, Snapshot, Technology};
use std::collections::{HashMap, HashSet};

/// Classification counts for one diffed snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    /// Entries absent from the previous snapshot
    pub new: usize,
    /// Entries whose ring changed
    pub moved: usize,
    /// Tombstones
    pub deleted: usize,
    /// Entries in the same ring
    pub unchanged: usize,
}

impl DiffStats {
    /// Count classifications in a technology list
    #[must_use]
    pub fn of(technologies: &[Technology]) -> Self {
        technologies
            .iter()
            .fold(Self::default(), |mut stats, tech| {
                match tech.change {
                    Change::New => stats.new += 1,
                    Change::Moved { .. } => stats.moved += 1,
                    Change::Deleted => stats.deleted += 1,
                    Change::Unchanged => stats.unchanged += 1,
                }
                stats
            })
    }

    /// Whether any entry changed
    #[inline]
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.new + self.moved + self.deleted > 0
    }
}

/// Diff `current` against `previous`, returning the classified snapshot
///
/// Any stale tombstones or markers on `current` are discarded first, so
/// diffing the same input twice gives the same result.
#[must_use]
pub fn diff(current: Snapshot, previous: Option<&Snapshot>) -> Snapshot {
    let Snapshot { date, technologies } = current;
    let mut technologies: Vec<Technology> = technologies
        .into_iter()
        .filter(|t| !t.is_deleted())
        .collect();

    let Some(previous) = previous else {
        for tech in &mut technologies {
            tech.change = Change::New;
        }
        return Snapshot { date, technologies };
    };

    let lookup: HashMap<&str, &Technology> =
        previous.live().map(|t| (t.name.as_str(), t)).collect();

    for tech in &mut technologies {
        tech.change = match lookup.get(tech.name.as_str()) {
            Some(prev) if prev.ring == tech.ring => Change::Unchanged,
            Some(prev) => Change::Moved {
                previous_ring: prev.ring.clone(),
            },
            None => Change::New,
        };
    }

    let present: HashSet<&str> = technologies.iter().map(|t| t.name.as_str()).collect();
    let tombstones: Vec<Technology> = previous
        .live()
        .filter(|t| !present.contains(t.name.as_str()))
        .map(|t| Technology {
            change: Change::Deleted,
            ..t.clone()
        })
        .collect();

    technologies.extend(tombstones);
    Snapshot { date, technologies }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tech(name: &str, ring: &str) -> Technology {
        Technology::new(name, ring, "Languages", format!("{name} description"))
    }

    fn find<'a>(snapshot: &'a Snapshot, name: &str) -> &'a Technology {
        snapshot
            .technologies
            .iter()
            .find(|t| t.name == name)
            .unwrap()
    }

    #[test]
    fn first_snapshot_is_all_new() {
        let first = Snapshot::new("20231201", vec![tech("Go", "Adopt"), tech("Rust", "Trial")]);
        let diffed = diff(first, None);

        assert_eq!(diffed.technologies.len(), 2);
        assert!(diffed.technologies.iter().all(Technology::is_new));
    }

    #[test]
    fn added_technology_is_new() {
        let a = diff(Snapshot::new("20231201", vec![tech("Go", "Adopt")]), None);
        let b = Snapshot::new("20231202", vec![tech("Go", "Adopt"), tech("React", "Trial")]);
        let b = diff(b, Some(&a));

        assert_eq!(find(&b, "Go").change, Change::Unchanged);
        assert!(find(&b, "React").is_new());
        assert_eq!(b.technologies.len(), 2);
    }

    #[test]
    fn ring_change_is_moved() {
        let a = diff(Snapshot::new("20231201", vec![tech("React", "Trial")]), None);
        let b = diff(Snapshot::new("20231202", vec![tech("React", "Adopt")]), Some(&a));

        let react = find(&b, "React");
        assert!(react.is_moved());
        assert_eq!(react.previous_ring(), Some("Trial"));
    }

    #[test]
    fn removed_technology_becomes_tombstone() {
        let angular = tech("Angular", "Hold").with_info("legacy");
        let a = diff(
            Snapshot::new("20231201", vec![tech("Go", "Adopt"), angular.clone()]),
            None,
        );
        let b = diff(Snapshot::new("20231202", vec![tech("Go", "Adopt")]), Some(&a));

        assert_eq!(b.technologies.len(), 2);
        assert_eq!(b.technologies[0].name, "Go");
        assert_eq!(
            b.technologies[1],
            Technology {
                change: Change::Deleted,
                ..angular
            }
        );
    }

    #[test]
    fn tombstone_is_reported_once() {
        let a = diff(Snapshot::new("1", vec![tech("Go", "Adopt"), tech("Angular", "Hold")]), None);
        let b = diff(Snapshot::new("2", vec![tech("Go", "Adopt")]), Some(&a));
        let c = diff(Snapshot::new("3", vec![tech("Go", "Adopt")]), Some(&b));

        assert_eq!(DiffStats::of(&b.technologies).deleted, 1);
        assert_eq!(DiffStats::of(&c.technologies).deleted, 0);
        assert_eq!(c.technologies.len(), 1);
    }

    #[test]
    fn readded_technology_is_new() {
        let a = diff(Snapshot::new("1", vec![tech("Angular", "Hold")]), None);
        let b = diff(Snapshot::new("2", vec![]), Some(&a));
        let c = diff(Snapshot::new("3", vec![tech("Angular", "Hold")]), Some(&b));

        assert!(find(&c, "Angular").is_new());
    }

    #[test]
    fn rediff_discards_stale_markers() {
        let a = diff(Snapshot::new("1", vec![tech("Go", "Adopt"), tech("Angular", "Hold")]), None);
        let b = diff(Snapshot::new("2", vec![tech("Go", "Adopt")]), Some(&a));
        let again = diff(b.clone(), Some(&a));

        assert_eq!(again, b);
    }

    #[test]
    fn stats_count_each_class() {
        let a = diff(
            Snapshot::new("1", vec![tech("Go", "Adopt"), tech("React", "Trial"), tech("Angular", "Hold")]),
            None,
        );
        let b = diff(
            Snapshot::new("2", vec![tech("Go", "Adopt"), tech("React", "Adopt"), tech("Rust", "Assess")]),
            Some(&a),
        );

        let stats = DiffStats::of(&b.technologies);
        assert_eq!(
            stats,
            DiffStats {
                new: 1,
                moved: 1,
                deleted: 1,
                unchanged: 1,
            }
        );
        assert!(stats.has_changes());
    }

    fn inventory() -> impl Strategy<Value = Vec<Technology>> {
        prop::collection::btree_map(
            "[a-z]{1,8}",
            prop_oneof![Just("Adopt"), Just("Trial"), Just("Assess"), Just("Hold")],
            0..12,
        )
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(name, ring)| tech(&name, ring))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_identical_snapshots_have_no_changes(techs in inventory()) {
            let a = diff(Snapshot::new("1", techs.clone()), None);
            let b = diff(Snapshot::new("2", techs), Some(&a));

            prop_assert!(!DiffStats::of(&b.technologies).has_changes());
        }

        #[test]
        fn prop_first_snapshot_has_no_tombstones(techs in inventory()) {
            let count = techs.len();
            let diffed = diff(Snapshot::new("1", techs), None);

            prop_assert_eq!(diffed.technologies.len(), count);
            prop_assert!(diffed.technologies.iter().all(Technology::is_new));
        }

        #[test]
        fn prop_classification_matches_previous(old in inventory(), new in inventory()) {
            let a = diff(Snapshot::new("1", old.clone()), None);
            let b = diff(Snapshot::new("2", new.clone()), Some(&a));

            for prev in &old {
                match new.iter().find(|t| t.name == prev.name) {
                    None => {
                        let tomb = b.technologies.iter().find(|t| t.name == prev.name).unwrap();
                        prop_assert!(tomb.is_deleted());
                        prop_assert_eq!(&tomb.ring, &prev.ring);
                        prop_assert_eq!(&tomb.description, &prev.description);
                    }
                    Some(cur) if cur.ring != prev.ring => {
                        let moved = b.technologies.iter().find(|t| t.name == prev.name).unwrap();
                        prop_assert_eq!(moved.previous_ring(), Some(prev.ring.as_str()));
                    }
                    Some(_) => {}
                }
            }
            prop_assert_eq!(b.live().count(), new.len());
        }
    }
}
