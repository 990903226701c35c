//! Tri-state cell values for attempt grids.

/// The state of a single cell in an attempt's mark grid.
///
/// A fresh attempt starts with every cell [`Unknown`](Self::Unknown). Marking
/// a cell turns it [`Filled`](Self::Filled) (part of the picture); crossing it
/// out turns it [`Empty`](Self::Empty) (explicitly not part of the picture).
///
/// The puzzle's solution image itself is boolean; `CellStatus` only appears on
/// the attempt side, where "not decided yet" is a distinct state.
///
/// # Examples
///
/// ```
/// use nonolace_core::CellStatus;
///
/// assert_eq!(CellStatus::default(), CellStatus::Unknown);
/// assert_eq!(CellStatus::from_filled(true), CellStatus::Filled);
/// assert_eq!(CellStatus::Empty.as_filled(), Some(false));
/// assert_eq!(CellStatus::Unknown.as_filled(), None);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellStatus {
    /// The cell has not been decided yet.
    #[default]
    Unknown,
    /// The cell is believed to be part of the picture.
    Filled,
    /// The cell is believed to be explicitly not part of the picture.
    Empty,
}

impl CellStatus {
    /// Converts a binary fill value into a decided cell status.
    #[must_use]
    #[inline]
    pub const fn from_filled(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }

    /// Returns the fill value of a decided cell, or `None` if undecided.
    #[must_use]
    #[inline]
    pub const fn as_filled(self) -> Option<bool> {
        match self {
            Self::Unknown => None,
            Self::Filled => Some(true),
            Self::Empty => Some(false),
        }
    }

    /// Returns `true` if the cell has been decided either way.
    #[must_use]
    #[inline]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns `true` if a binary fill value is compatible with this status.
    ///
    /// An [`Unknown`](Self::Unknown) cell admits both values; a decided cell
    /// admits only its own.
    #[must_use]
    #[inline]
    pub const fn admits(self, filled: bool) -> bool {
        match self.as_filled() {
            None => true,
            Some(known) => known == filled,
        }
    }
}
