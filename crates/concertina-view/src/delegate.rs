//! Selection and scroll notification hooks.
//!
//! Interested callers implement [`AccordionDelegate`] with named methods
//! instead of handing over a bag of closures; a substitutable trait object
//! is much easier to fake in tests. All methods default to no-ops and `()`
//! is the null delegate.

/// Pure-notification callbacks fired by the [`ListProvider`].
///
/// No return value is consumed; the provider's behavior does not depend on
/// what a delegate does.
///
/// [`ListProvider`]: crate::ListProvider
pub trait AccordionDelegate<P, C> {
    /// A parent row was tapped (it also toggled).
    fn on_parent_selected(&mut self, payload: &P) {
        let _ = payload;
    }

    /// A child row was tapped.
    fn on_child_selected(&mut self, payload: &C) {
        let _ = payload;
    }

    /// The host list reported a scroll offset change.
    fn on_scroll(&mut self, offset: f32) {
        let _ = offset;
    }
}

/// The null delegate.
impl<P, C> AccordionDelegate<P, C> for () {}
