//! Row height supply.
//!
//! The host toolkit asks for a height per row; the adapter answers through a
//! [`RowMetrics`] implementation so heights can depend on payload content
//! when they need to. Most lists just want two constants, which is what
//! [`FixedHeights`] provides.

/// Per-row-kind height supplier.
pub trait RowMetrics<P, C> {
    /// Height of a parent's own row.
    fn parent_height(&self, payload: &P) -> f32;

    /// Height of a child row.
    fn child_height(&self, payload: &C) -> f32;
}

/// Fixed heights per row kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHeights {
    /// Height of every parent row.
    pub parent: f32,
    /// Height of every child row.
    pub child: f32,
}

impl FixedHeights {
    /// Fixed heights with the given constants.
    #[must_use]
    pub fn new(parent: f32, child: f32) -> Self {
        Self { parent, child }
    }
}

impl Default for FixedHeights {
    fn default() -> Self {
        Self {
            parent: 64.0,
            child: 44.0,
        }
    }
}

impl<P, C> RowMetrics<P, C> for FixedHeights {
    fn parent_height(&self, _payload: &P) -> f32 {
        self.parent
    }

    fn child_height(&self, _payload: &C) -> f32 {
        self.child
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_heights() {
        let heights = FixedHeights::default();
        assert_eq!(heights.parent, 64.0);
        assert_eq!(heights.child, 44.0);
    }

    #[test]
    fn fixed_heights_ignore_payloads() {
        let heights = FixedHeights::new(40.0, 35.0);
        assert_eq!(RowMetrics::<&str, &str>::parent_height(&heights, &"x"), 40.0);
        assert_eq!(RowMetrics::<&str, &str>::child_height(&heights, &"y"), 35.0);
    }
}
