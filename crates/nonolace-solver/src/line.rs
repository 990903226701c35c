//! Line identities: one column or one row of the grid.

use nonolace_core::{CellStatus, Grid, Position, Puzzle};

/// Whether a line runs down a column or across a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum LineKind {
    /// A vertical line, identified by its x coordinate.
    #[display("column")]
    Column,
    /// A horizontal line, identified by its y coordinate.
    #[display("row")]
    Row,
}

/// A reference to one line (column or row) of a puzzle grid.
///
/// Lines are the unit of work for the solving engine: hints constrain lines,
/// the dirty queue holds lines, and permutations are enumerated per line.
/// `LineRef` is only an identity; cell contents are extracted on demand with
/// [`LineRef::cells`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{kind} {index}")]
pub struct LineRef {
    /// The direction of the line.
    pub kind: LineKind,
    /// The column index (for a column) or row index (for a row).
    pub index: usize,
}

impl LineRef {
    /// Creates a reference to column `index`.
    #[must_use]
    #[inline]
    pub const fn column(index: usize) -> Self {
        Self {
            kind: LineKind::Column,
            index,
        }
    }

    /// Creates a reference to row `index`.
    #[must_use]
    #[inline]
    pub const fn row(index: usize) -> Self {
        Self {
            kind: LineKind::Row,
            index,
        }
    }

    /// Returns the coordinate of the `i`-th cell along this line.
    #[must_use]
    #[inline]
    pub const fn coordinate(self, i: usize) -> Position {
        match self.kind {
            LineKind::Column => Position::new(self.index, i),
            LineKind::Row => Position::new(i, self.index),
        }
    }

    /// Returns the orthogonal line through the given coordinate.
    ///
    /// For a column this is the row through the coordinate, and vice versa.
    #[must_use]
    #[inline]
    pub const fn crossing(self, coordinate: Position) -> Self {
        match self.kind {
            LineKind::Column => Self::row(coordinate.y()),
            LineKind::Row => Self::column(coordinate.x()),
        }
    }

    /// Extracts this line's cells from a mark grid.
    ///
    /// # Panics
    ///
    /// Panics if the line index is out of bounds for the grid.
    #[must_use]
    pub fn cells(self, marks: &Grid<CellStatus>) -> Vec<CellStatus> {
        match self.kind {
            LineKind::Column => marks.column(self.index),
            LineKind::Row => marks.row(self.index),
        }
    }

    /// Returns this line's hint sequence from a puzzle.
    ///
    /// # Panics
    ///
    /// Panics if the line index is out of bounds for the puzzle.
    #[must_use]
    pub fn hints(self, puzzle: &Puzzle) -> &[usize] {
        match self.kind {
            LineKind::Column => puzzle.column_hints()[self.index].as_slice(),
            LineKind::Row => puzzle.row_hints()[self.index].as_slice(),
        }
    }
}
