//! Section aggregation.
//!
//! A [`Section`] groups an ordered run of parent items under optional header
//! and footer titles and carries the section's visible-row total. The total
//! is computed once at construction and adjusted incrementally on every
//! expand/collapse; it is never re-derived by scanning on the query path.

use crate::item::{ExpansionState, Item};

/// An ordered group of parent items with a cached visible-row total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<P, C> {
    items: Vec<Item<P, C>>,
    header_title: Option<String>,
    footer_title: Option<String>,
    /// Number of currently visible rows. Kept in lockstep with the items'
    /// expansion states by [`Section::expand_at`] / [`Section::collapse_at`].
    total: usize,
}

impl<P, C> Section<P, C> {
    /// Create a section from its items, deriving the initial row total from
    /// their expansion states.
    #[must_use]
    pub fn new(items: Vec<Item<P, C>>) -> Self {
        let total = items.iter().map(Item::visible_rows).sum();
        Self {
            items,
            header_title: None,
            footer_title: None,
            total,
        }
    }

    /// Set the header title.
    #[must_use]
    pub fn with_header(mut self, title: impl Into<String>) -> Self {
        self.header_title = Some(title.into());
        self
    }

    /// Set the footer title.
    #[must_use]
    pub fn with_footer(mut self, title: impl Into<String>) -> Self {
        self.footer_title = Some(title.into());
        self
    }

    /// The parent items, in display order.
    #[must_use]
    pub fn items(&self) -> &[Item<P, C>] {
        &self.items
    }

    /// Number of parent items (not visible rows).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of currently visible rows.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// The header title, if any.
    #[must_use]
    pub fn header_title(&self) -> Option<&str> {
        self.header_title.as_deref()
    }

    /// The footer title, if any.
    #[must_use]
    pub fn footer_title(&self) -> Option<&str> {
        self.footer_title.as_deref()
    }

    /// Re-derive the row total from the items' states.
    ///
    /// Audit helper for tests and debug assertions; the engine itself never
    /// consults this on a query path.
    #[must_use]
    pub fn recomputed_total(&self) -> usize {
        self.items.iter().map(Item::visible_rows).sum()
    }

    /// Mark `parent` expanded and grow the total by its child count.
    ///
    /// Returns the number of rows that became visible. The state flip and the
    /// total adjustment happen together so the two can never be observed out
    /// of step.
    pub(crate) fn expand_at(&mut self, parent: usize) -> usize {
        let added = self.items[parent].children().len();
        self.items[parent].state = ExpansionState::Expanded;
        self.total += added;
        added
    }

    /// Mark `parent` collapsed and shrink the total by its child count.
    ///
    /// Returns the number of rows that left the projection.
    pub(crate) fn collapse_at(&mut self, parent: usize) -> usize {
        let removed = self.items[parent].children().len();
        self.items[parent].state = ExpansionState::Collapsed;
        self.total -= removed;
        removed
    }

    /// Overwrite every item's state at once and re-derive the total.
    ///
    /// Used when restoring a saved expansion snapshot; equivalent to
    /// reconstructing the section.
    pub(crate) fn set_states<F>(&mut self, state_of: F)
    where
        F: Fn(usize) -> ExpansionState,
    {
        for (parent, item) in self.items.iter_mut().enumerate() {
            item.state = state_of(parent);
        }
        self.total = self.recomputed_total();
    }
}
