//! Positions within a sectioned list.

use std::fmt;

/// Identifies a row by section and item position.
///
/// Flat lists always use section `0`. Index paths are plain values and are
/// only meaningful against the data-source snapshot they were produced for;
/// after a reload, previously obtained paths may point elsewhere.
///
/// # Example
///
/// ```
/// use horizon_mvvm::collection::IndexPath;
///
/// let path = IndexPath::new(1, 3);
/// assert_eq!(path.section(), 1);
/// assert_eq!(path.item(), 3);
/// assert_eq!(IndexPath::row(2), IndexPath::new(0, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    section: usize,
    item: usize,
}

impl IndexPath {
    /// Creates an index path for `item` within `section`.
    #[inline]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Creates an index path for a row of a flat (single-section) list.
    #[inline]
    pub const fn row(item: usize) -> Self {
        Self::new(0, item)
    }

    /// The section position.
    #[inline]
    pub const fn section(&self) -> usize {
        self.section
    }

    /// The item position within the section.
    #[inline]
    pub const fn item(&self) -> usize {
        self.item
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}
