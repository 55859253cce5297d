//! Error types for the projection engine.

use core::fmt;

/// Result alias for engine operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by the projection engine.
///
/// All of these are caller-contract violations: the engine rejects them
/// explicitly instead of clamping or silently repairing, so a wrong index or
/// an invalid construction shows up at the call site rather than as a wrong
/// row count later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A section index at or past the section count.
    SectionOutOfBounds {
        /// The offending section index.
        section: usize,
        /// Number of sections available.
        count: usize,
    },
    /// A flat row index at or past the section's visible-row total.
    RowOutOfBounds {
        /// The offending flat index.
        flat_index: usize,
        /// The section's current visible-row total.
        total: usize,
    },
    /// A parent logical index at or past the section's item count.
    ParentOutOfBounds {
        /// The offending parent index.
        parent: usize,
        /// Number of parent items in the section.
        count: usize,
    },
    /// A toggle was requested for a flat index that resolves to a child row.
    NotAParentRow {
        /// The offending flat index.
        flat_index: usize,
    },
    /// More than one parent was expanded where the single-expansion policy
    /// allows at most one. Surfaced on construction and on state restore;
    /// never silently "fixed" by picking a winner.
    MultipleExpanded {
        /// How many parents were expanded.
        expanded: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SectionOutOfBounds { section, count } => {
                write!(f, "section index {section} out of bounds (count {count})")
            }
            Error::RowOutOfBounds { flat_index, total } => {
                write!(f, "flat row index {flat_index} out of bounds (total {total})")
            }
            Error::ParentOutOfBounds { parent, count } => {
                write!(f, "parent index {parent} out of bounds (count {count})")
            }
            Error::NotAParentRow { flat_index } => {
                write!(f, "flat row index {flat_index} is not a parent row")
            }
            Error::MultipleExpanded { expanded } => {
                write!(
                    f,
                    "{expanded} parents expanded where the single-expansion policy allows one"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
