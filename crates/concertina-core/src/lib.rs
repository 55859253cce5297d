#![forbid(unsafe_code)]

//! Core engine for concertina accordion lists.
//!
//! A concertina list is a single-column list in which each top-level parent
//! row expands to reveal an ordered run of child rows directly beneath it and
//! collapses to remove them again. This crate owns the projection and
//! mutation logic behind that: mapping flat visible-row indices to
//! parent/child identities given the current expansion states, and editing
//! the projection incrementally (one contiguous insert or delete per flip)
//! while each section's cached row total and the optional one-at-a-time
//! expansion policy stay consistent.
//!
//! Rendering, cell reuse and layout belong to the host toolkit; the engine
//! drives it through the narrow [`HostList`] trait and never touches pixels.
//!
//! # Example
//!
//! ```
//! use concertina_core::{Accordion, HostList, Item, RowContent, Section};
//! use std::ops::Range;
//!
//! struct NullHost;
//! impl HostList for NullHost {
//!     fn insert_rows(&mut self, _section: usize, _rows: Range<usize>) {}
//!     fn delete_rows(&mut self, _section: usize, _rows: Range<usize>) {}
//! }
//!
//! let mut accordion = Accordion::multiple(vec![Section::new(vec![
//!     Item::collapsed("Fruit", vec!["Apple", "Pear"]),
//!     Item::collapsed("Roots", vec!["Carrot"]),
//! ])]);
//!
//! accordion.tap(&mut NullHost, 0, 0)?;
//! assert_eq!(accordion.visible_rows(0)?, 4);
//! assert_eq!(accordion.row_content(0, 1)?, RowContent::Child(&"Apple"));
//! # Ok::<(), concertina_core::Error>(())
//! ```

pub mod accordion;
pub mod error;
pub mod host;
pub mod item;
pub mod persist;
pub mod resolver;
pub mod section;

pub use accordion::{Accordion, ExpandedParent, ExpansionPolicy, RowContent, Tap};
pub use error::{Error, Result};
pub use host::HostList;
#[cfg(any(test, feature = "test-helpers"))]
pub use host::{HostEdit, RecordingHost};
pub use item::{ExpansionState, Item};
pub use persist::PersistState;
pub use resolver::{Resolved, resolve};
pub use section::Section;
