//! Saving and restoring expansion state.
//!
//! A [`PersistState`] snapshots which parents are expanded, by position, so a
//! host application can keep the accordion's shape across launches. Restoring
//! is equivalent to reconstructing the accordion with the saved states:
//! section totals are re-derived and the single-expansion bookkeeping is
//! rebuilt and re-validated. The host list is not driven during a restore;
//! the caller reloads it wholesale afterwards.

use crate::accordion::{Accordion, ExpandedParent, ExpansionPolicy};
use crate::error::{Error, Result};
use crate::item::ExpansionState;
use crate::resolver;

/// Snapshot of which parents are expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PersistState {
    /// `(section, parent)` positions of expanded items.
    pub expanded: Vec<(usize, usize)>,
}

impl<P, C> Accordion<P, C> {
    /// Snapshot the current expansion states.
    #[must_use]
    pub fn save_state(&self) -> PersistState {
        let mut expanded = Vec::new();
        for (s, section) in self.sections.iter().enumerate() {
            for (p, item) in section.items().iter().enumerate() {
                if item.is_expanded() {
                    expanded.push((s, p));
                }
            }
        }
        PersistState { expanded }
    }

    /// Apply a saved snapshot.
    ///
    /// Every parent named in the snapshot becomes expanded and every other
    /// parent collapsed. Entries that no longer point at an existing parent
    /// are ignored, so a snapshot from older data restores what it can.
    /// Under [`ExpansionPolicy::Single`] a snapshot naming more than one
    /// live parent is rejected with [`Error::MultipleExpanded`] and the
    /// accordion is left unchanged.
    pub fn restore_state(&mut self, state: &PersistState) -> Result<()> {
        let live: Vec<(usize, usize)> = state
            .expanded
            .iter()
            .copied()
            .filter(|&(s, p)| self.sections.get(s).is_some_and(|sec| p < sec.count()))
            .collect();

        if self.policy == ExpansionPolicy::Single && live.len() > 1 {
            return Err(Error::MultipleExpanded {
                expanded: live.len(),
            });
        }

        for (s, section) in self.sections.iter_mut().enumerate() {
            section.set_states(|p| {
                if live.contains(&(s, p)) {
                    ExpansionState::Expanded
                } else {
                    ExpansionState::Collapsed
                }
            });
        }

        self.expanded = match (self.policy, live.as_slice()) {
            (ExpansionPolicy::Single, &[(section, parent)]) => Some(ExpandedParent {
                section,
                parent,
                parent_start: resolver::parent_start(self.sections[section].items(), parent),
            }),
            _ => None,
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::section::Section;

    fn fixture() -> Vec<Section<&'static str, &'static str>> {
        vec![
            Section::new(vec![
                Item::collapsed("a", vec!["a1", "a2"]),
                Item::collapsed("b", vec!["b1"]),
            ]),
            Section::new(vec![Item::collapsed("c", vec!["c1", "c2", "c3"])]),
        ]
    }

    #[test]
    fn save_restore_round_trip() {
        let mut accordion = Accordion::multiple(fixture());
        let mut host = crate::host::RecordingHost::new();
        accordion.tap(&mut host, 0, 1).unwrap();
        accordion.tap(&mut host, 1, 0).unwrap();

        let saved = accordion.save_state();
        assert_eq!(saved.expanded, vec![(0, 1), (1, 0)]);

        let mut fresh = Accordion::multiple(fixture());
        fresh.restore_state(&saved).unwrap();
        assert_eq!(fresh.visible_rows(0).unwrap(), 3);
        assert_eq!(fresh.visible_rows(1).unwrap(), 4);
        assert!(fresh.sections()[0].items()[1].is_expanded());
        assert!(!fresh.sections()[0].items()[0].is_expanded());
    }

    #[test]
    fn restore_collapses_parents_missing_from_snapshot() {
        let mut accordion = Accordion::multiple(vec![Section::new(vec![Item::expanded(
            "a",
            vec!["a1"],
        )])]);
        accordion.restore_state(&PersistState::default()).unwrap();
        assert!(!accordion.sections()[0].items()[0].is_expanded());
        assert_eq!(accordion.visible_rows(0).unwrap(), 1);
    }

    #[test]
    fn restore_ignores_stale_entries() {
        let mut accordion = Accordion::single(fixture()).unwrap();
        let state = PersistState {
            expanded: vec![(7, 0), (0, 99), (1, 0)],
        };
        accordion.restore_state(&state).unwrap();
        assert!(accordion.sections()[1].items()[0].is_expanded());
        assert_eq!(
            accordion.expanded_parent(),
            Some(ExpandedParent {
                section: 1,
                parent: 0,
                parent_start: 0,
            })
        );
    }

    #[test]
    fn restore_rejects_multiple_expanded_under_single_policy() {
        let mut accordion = Accordion::single(fixture()).unwrap();
        let state = PersistState {
            expanded: vec![(0, 0), (1, 0)],
        };
        assert_eq!(
            accordion.restore_state(&state).unwrap_err(),
            Error::MultipleExpanded { expanded: 2 }
        );
        // Left unchanged.
        assert_eq!(accordion.visible_rows(0).unwrap(), 2);
    }

    #[test]
    fn restore_rebuilds_single_expansion_bookkeeping() {
        let mut accordion = Accordion::single(fixture()).unwrap();
        let state = PersistState {
            expanded: vec![(0, 1)],
        };
        accordion.restore_state(&state).unwrap();
        assert_eq!(
            accordion.expanded_parent(),
            Some(ExpandedParent {
                section: 0,
                parent: 1,
                parent_start: 1,
            })
        );

        // Toggling after a restore behaves exactly as after construction.
        let mut host = crate::host::RecordingHost::new();
        accordion.tap(&mut host, 1, 0).unwrap();
        assert_eq!(
            host.take_edits(),
            vec![
                crate::host::HostEdit::Delete {
                    section: 0,
                    rows: 2..3
                },
                crate::host::HostEdit::Insert {
                    section: 1,
                    rows: 1..4
                },
            ]
        );
    }
}
