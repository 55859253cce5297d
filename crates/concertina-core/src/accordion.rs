//! The accordion engine: sectioned items, expansion policy, and the toggle
//! state machine.
//!
//! [`Accordion`] owns the sections and answers every projection query the
//! view layer needs (row counts, row contents, flat-index resolution). Its
//! mutation surface is the tap/toggle family: each call resolves the tapped
//! row, flips at most two parents' expansion states, mirrors the change into
//! the host list as one contiguous insert and/or delete per flip, and keeps
//! each section's cached row total and the single-expansion bookkeeping in
//! lockstep.

use crate::error::{Error, Result};
use crate::host::HostList;
use crate::item::ExpansionState;
use crate::resolver::{self, Resolved, resolve};
use crate::section::Section;

/// How many parents may be expanded at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionPolicy {
    /// At most one parent across all sections; expanding one collapses the
    /// previously expanded one first.
    #[default]
    Single,
    /// Any number of parents may be expanded independently.
    Multiple,
}

/// The remembered "currently expanded parent" under
/// [`ExpansionPolicy::Single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedParent {
    /// Section holding the expanded parent.
    pub section: usize,
    /// Logical index of the parent within its section.
    pub parent: usize,
    /// Flat index of the parent's own row at the time it expanded. Valid for
    /// as long as the parent stays the only expanded one, which the policy
    /// guarantees.
    pub parent_start: usize,
}

/// The logical item backing one visible row.
///
/// This is what a cell binder consumes: a typed descriptor instead of a
/// stringly reuse identifier, resolved by the engine and rendered elsewhere.
#[derive(Debug, PartialEq, Eq)]
pub enum RowContent<'a, P, C> {
    /// The row is a parent's own row.
    Parent(&'a P),
    /// The row belongs to a parent's child run.
    Child(&'a C),
}

impl<P, C> RowContent<'_, P, C> {
    /// Whether the row is a parent row.
    #[must_use]
    pub fn is_parent(&self) -> bool {
        matches!(self, RowContent::Parent(_))
    }
}

/// Outcome of a row tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// A parent row was tapped and toggled into `state`.
    Parent {
        /// Logical index of the toggled parent.
        parent: usize,
        /// The parent's state after the toggle.
        state: ExpansionState,
    },
    /// A child row was tapped; nothing changed.
    Child {
        /// Logical index of the owning parent.
        parent: usize,
        /// Offset of the tapped child within the parent's child run.
        child_index: usize,
    },
}

/// Sectioned accordion state plus the expansion policy machinery.
///
/// Sections and items are constructed by the caller and handed over whole;
/// the engine never creates or destroys them, it only toggles expansion
/// states and maintains the derived bookkeeping.
#[derive(Debug, Clone)]
pub struct Accordion<P, C> {
    pub(crate) sections: Vec<Section<P, C>>,
    pub(crate) policy: ExpansionPolicy,
    /// Only populated under [`ExpansionPolicy::Single`].
    pub(crate) expanded: Option<ExpandedParent>,
}

impl<P, C> Accordion<P, C> {
    /// Create an accordion under the given policy.
    ///
    /// Under [`ExpansionPolicy::Single`] at most one item may start out
    /// expanded; more than one is a caller bug and is rejected with
    /// [`Error::MultipleExpanded`] rather than repaired by picking a winner.
    pub fn new(sections: Vec<Section<P, C>>, policy: ExpansionPolicy) -> Result<Self> {
        let mut expanded = None;

        if policy == ExpansionPolicy::Single {
            let mut found = 0;
            for (s, section) in sections.iter().enumerate() {
                let mut start = 0;
                for (p, item) in section.items().iter().enumerate() {
                    if item.is_expanded() {
                        found += 1;
                        expanded = Some(ExpandedParent {
                            section: s,
                            parent: p,
                            parent_start: start,
                        });
                    }
                    start += item.visible_rows();
                }
            }
            if found > 1 {
                return Err(Error::MultipleExpanded { expanded: found });
            }
        }

        Ok(Self {
            sections,
            policy,
            expanded,
        })
    }

    /// Create a single-expansion accordion.
    ///
    /// Fails if more than one item starts out expanded.
    pub fn single(sections: Vec<Section<P, C>>) -> Result<Self> {
        Self::new(sections, ExpansionPolicy::Single)
    }

    /// Create a multi-expansion accordion. Any starting states are valid.
    #[must_use]
    pub fn multiple(sections: Vec<Section<P, C>>) -> Self {
        Self {
            sections,
            policy: ExpansionPolicy::Multiple,
            expanded: None,
        }
    }

    /// The active expansion policy.
    #[must_use]
    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    /// All sections, in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section<P, C>] {
        &self.sections
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// The remembered expanded parent under the single-expansion policy.
    ///
    /// Always `None` under [`ExpansionPolicy::Multiple`].
    #[must_use]
    pub fn expanded_parent(&self) -> Option<ExpandedParent> {
        self.expanded
    }

    /// The section at `section`, or [`Error::SectionOutOfBounds`].
    pub fn section(&self, section: usize) -> Result<&Section<P, C>> {
        self.sections.get(section).ok_or(Error::SectionOutOfBounds {
            section,
            count: self.sections.len(),
        })
    }

    /// Number of visible rows in `section`.
    pub fn visible_rows(&self, section: usize) -> Result<usize> {
        Ok(self.section(section)?.total())
    }

    /// Resolve a flat row index within `section`, rejecting out-of-range
    /// indices against the section's current total.
    pub fn resolve_row(&self, section: usize, flat_index: usize) -> Result<Resolved> {
        let sec = self.section(section)?;
        if flat_index >= sec.total() {
            return Err(Error::RowOutOfBounds {
                flat_index,
                total: sec.total(),
            });
        }
        Ok(resolve(sec.items(), flat_index))
    }

    /// The logical item backing the row at `flat_index` of `section`.
    pub fn row_content(&self, section: usize, flat_index: usize) -> Result<RowContent<'_, P, C>> {
        let resolved = self.resolve_row(section, flat_index)?;
        let item = &self.section(section)?.items()[resolved.parent];
        if resolved.is_parent {
            Ok(RowContent::Parent(item.payload()))
        } else {
            Ok(RowContent::Child(
                &item.children()[resolved.child_offset(flat_index)],
            ))
        }
    }

    /// Handle a tap on the row at `flat_index` of `section`.
    ///
    /// A parent row toggles (see [`Accordion::toggle`]); a child row changes
    /// nothing. Either way the resolved identity is returned so the caller
    /// can fire its selection callbacks.
    pub fn tap<H: HostList>(
        &mut self,
        host: &mut H,
        section: usize,
        flat_index: usize,
    ) -> Result<Tap> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("accordion_tap", section, flat_index).entered();

        let resolved = self.resolve_row(section, flat_index)?;
        if resolved.is_parent {
            let state = self.toggle(host, section, resolved.parent, resolved.parent_start)?;
            Ok(Tap::Parent {
                parent: resolved.parent,
                state,
            })
        } else {
            Ok(Tap::Child {
                parent: resolved.parent,
                child_index: resolved.child_offset(flat_index),
            })
        }
    }

    /// Toggle the parent row at `flat_index`, rejecting child rows with
    /// [`Error::NotAParentRow`].
    pub fn toggle_row<H: HostList>(
        &mut self,
        host: &mut H,
        section: usize,
        flat_index: usize,
    ) -> Result<ExpansionState> {
        let resolved = self.resolve_row(section, flat_index)?;
        if !resolved.is_parent {
            return Err(Error::NotAParentRow { flat_index });
        }
        self.toggle(host, section, resolved.parent, resolved.parent_start)
    }

    /// Toggle the expansion state of `parent` in `section`.
    ///
    /// `parent_start` must be the flat index of the parent's own row in the
    /// current projection (as produced by [`Accordion::resolve_row`]).
    ///
    /// Expanding inserts the child run immediately after the parent row and
    /// grows the section total; collapsing deletes the same run and shrinks
    /// it. A parent with no children still flips state but produces no host
    /// call and leaves the total untouched. Under the single-expansion
    /// policy, expanding first collapses the previously expanded parent and,
    /// when that parent sat earlier in the same section, shifts the insert
    /// position left by the rows its collapse removed.
    ///
    /// Returns the parent's state after the toggle.
    pub fn toggle<H: HostList>(
        &mut self,
        host: &mut H,
        section: usize,
        parent: usize,
        parent_start: usize,
    ) -> Result<ExpansionState> {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("accordion_toggle", section, parent, parent_start).entered();

        let sec = self.section(section)?;
        let item = sec.items().get(parent).ok_or(Error::ParentOutOfBounds {
            parent,
            count: sec.count(),
        })?;
        debug_assert_eq!(
            resolver::parent_start(sec.items(), parent),
            parent_start,
            "stale parent_start for parent {parent} of section {section}"
        );
        let current = item.state();

        let state = match current {
            ExpansionState::Expanded => {
                self.collapse(host, section, parent, parent_start);
                if self.policy == ExpansionPolicy::Single {
                    self.expanded = None;
                }
                ExpansionState::Collapsed
            }
            ExpansionState::Collapsed => {
                let mut start = parent_start;

                if self.policy == ExpansionPolicy::Single
                    && let Some(prev) = self.expanded.take()
                {
                    let removed = self.collapse(host, prev.section, prev.parent, prev.parent_start);
                    // The collapse shifted every later row of its own section
                    // up by the removed run; flat indices in other sections
                    // are untouched.
                    if prev.section == section && start > prev.parent_start {
                        start -= removed;
                    }
                }

                self.expand(host, section, parent, start);
                if self.policy == ExpansionPolicy::Single {
                    self.expanded = Some(ExpandedParent {
                        section,
                        parent,
                        parent_start: start,
                    });
                }
                ExpansionState::Expanded
            }
        };

        debug_assert!(self.is_consistent(), "accordion bookkeeping out of step");
        Ok(state)
    }

    /// Flip `parent` expanded and mirror the insert into the host.
    fn expand<H: HostList>(
        &mut self,
        host: &mut H,
        section: usize,
        parent: usize,
        parent_start: usize,
    ) {
        let inserted = self.sections[section].expand_at(parent);
        if inserted == 0 {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(section, parent, rows = inserted, "expand");

        let rows = parent_start + 1..parent_start + 1 + inserted;
        let last = rows.end - 1;
        host.insert_rows(section, rows);
        if !host.is_row_visible(section, last) {
            host.scroll_to_row(section, last);
        }
    }

    /// Flip `parent` collapsed and mirror the delete into the host. Returns
    /// the number of rows removed.
    fn collapse<H: HostList>(
        &mut self,
        host: &mut H,
        section: usize,
        parent: usize,
        parent_start: usize,
    ) -> usize {
        let removed = self.sections[section].collapse_at(parent);
        if removed == 0 {
            return 0;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(section, parent, rows = removed, "collapse");

        host.delete_rows(section, parent_start + 1..parent_start + 1 + removed);
        removed
    }

    /// Whether every cached total matches a fresh recount and the policy
    /// bookkeeping points where it should.
    fn is_consistent(&self) -> bool {
        let totals_agree = self
            .sections
            .iter()
            .all(|s| s.total() == s.recomputed_total());

        let policy_agrees = match self.policy {
            ExpansionPolicy::Multiple => self.expanded.is_none(),
            ExpansionPolicy::Single => {
                let expanded: Vec<(usize, usize)> = self
                    .sections
                    .iter()
                    .enumerate()
                    .flat_map(|(s, section)| {
                        section
                            .items()
                            .iter()
                            .enumerate()
                            .filter(|(_, item)| item.is_expanded())
                            .map(move |(p, _)| (s, p))
                    })
                    .collect();
                match (&self.expanded, expanded.as_slice()) {
                    (None, []) => true,
                    (Some(r), [(s, p)]) => {
                        r.section == *s
                            && r.parent == *p
                            && r.parent_start
                                == resolver::parent_start(self.sections[*s].items(), *p)
                    }
                    _ => false,
                }
            }
        };

        totals_agree && policy_agrees
    }
}
