#![forbid(unsafe_code)]

//! View-binding adapter for concertina accordion lists.
//!
//! This crate is the glue between the projection engine in
//! [`concertina-core`](concertina_core) and whatever toolkit hosts the list:
//! a [`ListProvider`] answers the host's data-source questions (row counts,
//! row contents, heights, section titles), routes row taps into the engine,
//! and fires [`AccordionDelegate`] notifications. The engine decides *which
//! logical item* backs each row; binding that item to an actual cell stays
//! with the caller.
//!
//! # Example
//!
//! ```
//! use concertina_core::{Accordion, HostList, Item, Section};
//! use concertina_view::{FixedHeights, ListProvider};
//! use std::ops::Range;
//!
//! struct NullHost;
//! impl HostList for NullHost {
//!     fn insert_rows(&mut self, _section: usize, _rows: Range<usize>) {}
//!     fn delete_rows(&mut self, _section: usize, _rows: Range<usize>) {}
//! }
//!
//! let accordion = Accordion::multiple(vec![Section::new(vec![
//!     Item::collapsed("Fruit", vec!["Apple", "Pear"]),
//! ])]);
//! let mut provider =
//!     ListProvider::new(accordion).with_metrics(FixedHeights::new(40.0, 35.0));
//!
//! provider.on_row_tapped(&mut NullHost, 0, 0)?;
//! assert_eq!(provider.row_count(0)?, 3);
//! assert_eq!(provider.row_height(0, 1)?, 35.0);
//! # Ok::<(), concertina_core::Error>(())
//! ```

pub mod delegate;
pub mod metrics;
pub mod provider;

pub use delegate::AccordionDelegate;
pub use metrics::{FixedHeights, RowMetrics};
pub use provider::ListProvider;

pub use concertina_core::{RowContent, Tap};
