//! Parent items and their expansion state.
//!
//! An [`Item`] is one top-level row of an accordion section together with the
//! ordered run of child rows it reveals while expanded. Children are fixed at
//! construction; the engine only ever flips the [`ExpansionState`] and keeps
//! the section row total in sync with it.

/// Expansion state of a parent item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpansionState {
    /// Only the parent's own row is visible.
    #[default]
    Collapsed,
    /// The parent's own row plus all of its child rows are visible.
    Expanded,
}

impl ExpansionState {
    /// Whether this is [`ExpansionState::Expanded`].
    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// A parent item: its own display payload plus an ordered run of children.
///
/// `P` is the parent's payload type, `C` the child payload type. The engine
/// never reads into either; it only counts children and flips state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<P, C> {
    /// Crate-visible so the section aggregator can flip it in lockstep with
    /// its cached row total.
    pub(crate) state: ExpansionState,
    payload: P,
    children: Vec<C>,
}

impl<P, C> Item<P, C> {
    /// Create an item in the given state.
    #[must_use]
    pub fn new(state: ExpansionState, payload: P, children: Vec<C>) -> Self {
        Self {
            state,
            payload,
            children,
        }
    }

    /// Create a collapsed item.
    #[must_use]
    pub fn collapsed(payload: P, children: Vec<C>) -> Self {
        Self::new(ExpansionState::Collapsed, payload, children)
    }

    /// Create an item that starts out expanded.
    #[must_use]
    pub fn expanded(payload: P, children: Vec<C>) -> Self {
        Self::new(ExpansionState::Expanded, payload, children)
    }

    /// Create a collapsed item with no children.
    #[must_use]
    pub fn leaf(payload: P) -> Self {
        Self::new(ExpansionState::Collapsed, payload, Vec::new())
    }

    /// Current expansion state.
    #[must_use]
    pub fn state(&self) -> ExpansionState {
        self.state
    }

    /// Whether the item is currently expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// The parent's own display payload.
    #[must_use]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// The child payloads, in display order.
    #[must_use]
    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// Number of flat rows this item currently contributes.
    ///
    /// An expanded item contributes its own row plus one row per child; a
    /// collapsed item contributes its own row only.
    #[must_use]
    pub fn visible_rows(&self) -> usize {
        match self.state {
            ExpansionState::Expanded => self.children.len() + 1,
            ExpansionState::Collapsed => 1,
        }
    }
}
