//! The list provider: engine plus heights plus callbacks, behind the
//! surface a host list view consumes.
//!
//! [`ListProvider`] is thin glue. Every answer it gives is a projection
//! query against the engine; every tap it receives is resolved there and
//! mirrored into the host list, after which the matching delegate hook
//! fires. It owns no row state of its own.

use concertina_core::{Accordion, HostList, Result, RowContent, Tap};

use crate::delegate::AccordionDelegate;
use crate::metrics::{FixedHeights, RowMetrics};

/// Adapter between an [`Accordion`] and a host list view.
#[derive(Debug)]
pub struct ListProvider<P, C, M = FixedHeights, D = ()> {
    accordion: Accordion<P, C>,
    metrics: M,
    delegate: D,
}

impl<P, C> ListProvider<P, C> {
    /// Wrap an accordion with default fixed heights and no delegate.
    #[must_use]
    pub fn new(accordion: Accordion<P, C>) -> Self {
        Self {
            accordion,
            metrics: FixedHeights::default(),
            delegate: (),
        }
    }
}

impl<P, C, M, D> ListProvider<P, C, M, D> {
    /// Replace the height supplier.
    #[must_use]
    pub fn with_metrics<M2>(self, metrics: M2) -> ListProvider<P, C, M2, D> {
        ListProvider {
            accordion: self.accordion,
            metrics,
            delegate: self.delegate,
        }
    }

    /// Replace the delegate.
    #[must_use]
    pub fn with_delegate<D2>(self, delegate: D2) -> ListProvider<P, C, M, D2> {
        ListProvider {
            accordion: self.accordion,
            metrics: self.metrics,
            delegate,
        }
    }

    /// The wrapped engine.
    #[must_use]
    pub fn accordion(&self) -> &Accordion<P, C> {
        &self.accordion
    }

    /// The wrapped engine, mutably (e.g. for state restore).
    pub fn accordion_mut(&mut self) -> &mut Accordion<P, C> {
        &mut self.accordion
    }

    /// The delegate.
    #[must_use]
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Number of sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.accordion.section_count()
    }

    /// Number of visible rows in `section`.
    pub fn row_count(&self, section: usize) -> Result<usize> {
        self.accordion.visible_rows(section)
    }

    /// Header title passthrough; `None` for untitled or unknown sections.
    #[must_use]
    pub fn header_title(&self, section: usize) -> Option<&str> {
        self.accordion.sections().get(section)?.header_title()
    }

    /// Footer title passthrough; `None` for untitled or unknown sections.
    #[must_use]
    pub fn footer_title(&self, section: usize) -> Option<&str> {
        self.accordion.sections().get(section)?.footer_title()
    }

    /// The logical item backing the row at `flat_index` of `section`.
    pub fn row_content(&self, section: usize, flat_index: usize) -> Result<RowContent<'_, P, C>> {
        self.accordion.row_content(section, flat_index)
    }
}

impl<P, C, M, D> ListProvider<P, C, M, D>
where
    M: RowMetrics<P, C>,
    D: AccordionDelegate<P, C>,
{
    /// Height of the row at `flat_index` of `section`.
    pub fn row_height(&self, section: usize, flat_index: usize) -> Result<f32> {
        Ok(match self.accordion.row_content(section, flat_index)? {
            RowContent::Parent(payload) => self.metrics.parent_height(payload),
            RowContent::Child(payload) => self.metrics.child_height(payload),
        })
    }

    /// Handle a tap on the row at `flat_index` of `section`.
    ///
    /// Parent rows toggle and fire [`AccordionDelegate::on_parent_selected`];
    /// child rows fire [`AccordionDelegate::on_child_selected`] and change
    /// nothing. Host-list edits happen inside the same call as the engine's
    /// state flip, before any delegate hook runs.
    pub fn on_row_tapped<H: HostList>(
        &mut self,
        host: &mut H,
        section: usize,
        flat_index: usize,
    ) -> Result<Tap> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("provider_tap", section, flat_index).entered();

        let tap = self.accordion.tap(host, section, flat_index)?;
        let items = self.accordion.sections()[section].items();
        match tap {
            Tap::Parent { parent, .. } => {
                self.delegate.on_parent_selected(items[parent].payload());
            }
            Tap::Child {
                parent,
                child_index,
            } => {
                self.delegate
                    .on_child_selected(&items[parent].children()[child_index]);
            }
        }
        Ok(tap)
    }

    /// Forward a scroll offset change to the delegate.
    pub fn on_scroll(&mut self, offset: f32) {
        self.delegate.on_scroll(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concertina_core::{ExpansionState, HostEdit, Item, RecordingHost, Section};

    /// Delegate fake that records every notification.
    #[derive(Debug, Default)]
    struct RecordingDelegate {
        parents: Vec<String>,
        children: Vec<String>,
        scrolls: Vec<f32>,
    }

    impl AccordionDelegate<String, String> for RecordingDelegate {
        fn on_parent_selected(&mut self, payload: &String) {
            self.parents.push(payload.clone());
        }

        fn on_child_selected(&mut self, payload: &String) {
            self.children.push(payload.clone());
        }

        fn on_scroll(&mut self, offset: f32) {
            self.scrolls.push(offset);
        }
    }

    fn provider() -> ListProvider<String, String, FixedHeights, RecordingDelegate> {
        let sections = vec![
            Section::new(vec![
                Item::collapsed(
                    "Group A".to_owned(),
                    vec!["Uruguay".to_owned(), "Russia".to_owned()],
                ),
                Item::collapsed("Group B".to_owned(), vec!["Spain".to_owned()]),
            ])
            .with_header("World Cup 2018".to_owned()),
        ];
        ListProvider::new(Accordion::single(sections).unwrap())
            .with_delegate(RecordingDelegate::default())
    }

    #[test]
    fn surface_reflects_engine_state() {
        let provider = provider();
        assert_eq!(provider.section_count(), 1);
        assert_eq!(provider.row_count(0).unwrap(), 2);
        assert_eq!(provider.header_title(0), Some("World Cup 2018"));
        assert_eq!(provider.footer_title(0), None);
        assert_eq!(provider.header_title(9), None);
        assert!(provider.row_content(0, 0).unwrap().is_parent());
    }

    #[test]
    fn tap_on_parent_toggles_and_notifies() {
        let mut provider = provider();
        let mut host = RecordingHost::new();

        let tap = provider.on_row_tapped(&mut host, 0, 0).unwrap();
        assert_eq!(
            tap,
            Tap::Parent {
                parent: 0,
                state: ExpansionState::Expanded
            }
        );
        assert_eq!(
            host.take_edits(),
            vec![HostEdit::Insert {
                section: 0,
                rows: 1..3
            }]
        );
        assert_eq!(provider.delegate().parents, vec!["Group A".to_owned()]);
        assert_eq!(provider.row_count(0).unwrap(), 4);
    }

    #[test]
    fn tap_on_child_notifies_without_edits() {
        let mut provider = provider();
        let mut host = RecordingHost::new();
        provider.on_row_tapped(&mut host, 0, 0).unwrap();
        host.take_edits();

        let tap = provider.on_row_tapped(&mut host, 0, 2).unwrap();
        assert_eq!(
            tap,
            Tap::Child {
                parent: 0,
                child_index: 1
            }
        );
        assert!(host.edits().is_empty());
        assert_eq!(provider.delegate().children, vec!["Russia".to_owned()]);
        assert_eq!(provider.row_count(0).unwrap(), 4);
    }

    #[test]
    fn row_height_delegates_per_row_kind() {
        let mut provider = provider().with_metrics(FixedHeights::new(40.0, 35.0));
        let mut host = RecordingHost::new();
        provider.on_row_tapped(&mut host, 0, 0).unwrap();

        assert_eq!(provider.row_height(0, 0).unwrap(), 40.0);
        assert_eq!(provider.row_height(0, 1).unwrap(), 35.0);
        assert!(provider.row_height(0, 99).is_err());
    }

    #[test]
    fn default_heights_match_row_kinds() {
        let provider = ListProvider::new(Accordion::multiple(vec![Section::new(vec![
            Item::expanded("p".to_owned(), vec!["c".to_owned()]),
        ])]));
        assert_eq!(provider.row_height(0, 0).unwrap(), 64.0);
        assert_eq!(provider.row_height(0, 1).unwrap(), 44.0);
    }

    #[test]
    fn scroll_offsets_reach_the_delegate() {
        let mut provider = provider();
        provider.on_scroll(12.5);
        provider.on_scroll(80.0);
        assert_eq!(provider.delegate().scrolls, vec![12.5, 80.0]);
    }

    #[test]
    fn errors_pass_through_untouched() {
        let mut provider = provider();
        let mut host = RecordingHost::new();
        assert!(provider.on_row_tapped(&mut host, 0, 99).is_err());
        assert!(provider.delegate().parents.is_empty());
        assert!(host.edits().is_empty());
    }
}
