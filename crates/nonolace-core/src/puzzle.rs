//! The immutable puzzle definition: solution image plus line hints.

use tinyvec::TinyVec;

use crate::{CellStatus, Grid, Position};

/// Run-length hints for a single line (column or row).
///
/// Each entry is the length of one contiguous run of filled cells, in order
/// along the line. An all-empty line is represented by the single hint `0`.
/// Hints are short in practice, so they are stored inline up to eight runs.
pub type LineHints = TinyVec<[usize; 8]>;

/// An immutable nonogram puzzle.
///
/// A puzzle is the solution image (a boolean grid, `true` where the picture
/// has a mark) together with the run-length hints derived from it, one hint
/// sequence per column and per row. Hints are always derivable from the
/// image; [`Puzzle::from_image`] is the only constructor and nothing mutates
/// a puzzle afterwards.
///
/// # Examples
///
/// ```
/// use nonolace_core::{Grid, Puzzle};
///
/// let image = Grid::parse_image(
///     "
///     ###.
///     ..#
///     ",
/// )?;
/// let puzzle = Puzzle::from_image(image);
///
/// assert_eq!(puzzle.column_hints()[0].as_slice(), &[1]);
/// assert_eq!(puzzle.column_hints()[2].as_slice(), &[1]);
/// assert_eq!(puzzle.row_hints()[0].as_slice(), &[2]);
/// # Ok::<(), nonolace_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    image: Grid<bool>,
    column_hints: Vec<LineHints>,
    row_hints: Vec<LineHints>,
}

impl Puzzle {
    /// Derives a puzzle from a solution image.
    ///
    /// Hints are the run-length encoding of contiguous filled cells along
    /// each column (top to bottom) and each row (left to right). A line with
    /// no filled cells gets the single hint `0`.
    #[must_use]
    pub fn from_image(image: Grid<bool>) -> Self {
        let column_hints = (0..image.width()).map(|x| line_hints(image.column(x))).collect();
        let row_hints = (0..image.height()).map(|y| line_hints(image.row(y))).collect();
        Self {
            image,
            column_hints,
            row_hints,
        }
    }

    /// Returns the solution image.
    #[must_use]
    #[inline]
    pub fn image(&self) -> &Grid<bool> {
        &self.image
    }

    /// Returns the puzzle width (number of columns).
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.image.width()
    }

    /// Returns the puzzle height (number of rows).
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// Returns one hint sequence per column, left to right.
    #[must_use]
    #[inline]
    pub fn column_hints(&self) -> &[LineHints] {
        &self.column_hints
    }

    /// Returns one hint sequence per row, top to bottom.
    #[must_use]
    #[inline]
    pub fn row_hints(&self) -> &[LineHints] {
        &self.row_hints
    }

    /// Returns `true` if the marks match the solution image exactly.
    ///
    /// A cell counts as matching when it is [`CellStatus::Filled`] exactly
    /// where the image is filled; [`CellStatus::Empty`] and
    /// [`CellStatus::Unknown`] both count as "not filled".
    ///
    /// # Panics
    ///
    /// Panics if `marks` does not have the puzzle's dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use nonolace_core::{Grid, Puzzle};
    ///
    /// let puzzle = Puzzle::from_image(Grid::parse_image("#.")?);
    ///
    /// assert!(!puzzle.is_complete(&Grid::parse_marks("??")?));
    /// assert!(puzzle.is_complete(&Grid::parse_marks("#?")?));
    /// assert!(puzzle.is_complete(&Grid::parse_marks("#.")?));
    /// # Ok::<(), nonolace_core::ParseGridError>(())
    /// ```
    #[must_use]
    pub fn is_complete(&self, marks: &Grid<CellStatus>) -> bool {
        assert_eq!(marks.width(), self.width(), "mark grid width mismatch");
        assert_eq!(marks.height(), self.height(), "mark grid height mismatch");
        self.image
            .iter()
            .all(|(pos, &filled)| marks[pos].is_filled() == filled)
    }
}

fn line_hints(cells: Vec<bool>) -> LineHints {
    let mut hints = LineHints::default();
    let mut run = 0;
    for filled in cells {
        if filled {
            run += 1;
        } else if run > 0 {
            hints.push(run);
            run = 0;
        }
    }
    if run > 0 {
        hints.push(run);
    }
    if hints.is_empty() {
        hints.push(0);
    }
    hints
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn puzzle_from(text: &str) -> Puzzle {
        Puzzle::from_image(Grid::parse_image(text).unwrap())
    }

    #[test]
    fn test_hints_for_empty_line_are_zero() {
        let puzzle = puzzle_from(
            "
            .#
            .#
            ",
        );
        assert_eq!(puzzle.column_hints()[0].as_slice(), &[0]);
        assert_eq!(puzzle.column_hints()[1].as_slice(), &[2]);
    }

    #[test]
    fn test_hints_split_runs() {
        let puzzle = puzzle_from("##.#.###");
        assert_eq!(puzzle.row_hints()[0].as_slice(), &[2, 1, 3]);
        // Every column of a one-row image is a single cell.
        assert_eq!(puzzle.column_hints()[0].as_slice(), &[1]);
        assert_eq!(puzzle.column_hints()[2].as_slice(), &[0]);
    }

    #[test]
    fn test_hints_full_line() {
        let puzzle = puzzle_from(
            "
            ###
            ###
            ###
            ",
        );
        for hints in puzzle.column_hints() {
            assert_eq!(hints.as_slice(), &[3]);
        }
        for hints in puzzle.row_hints() {
            assert_eq!(hints.as_slice(), &[3]);
        }
    }

    #[test]
    fn test_is_complete_ignores_empty_versus_unknown() {
        let puzzle = puzzle_from(
            "
            #.
            .#
            ",
        );
        assert!(puzzle.is_complete(&Grid::parse_marks("#?\n?#").unwrap()));
        assert!(puzzle.is_complete(&Grid::parse_marks("#.\n.#").unwrap()));
        assert!(!puzzle.is_complete(&Grid::parse_marks("##\n.#").unwrap()));
        assert!(!puzzle.is_complete(&Grid::parse_marks("#?\n??").unwrap()));
    }

    #[test]
    fn test_image_matches_itself() {
        let puzzle = puzzle_from(
            "
            .##
            #..
            ",
        );
        let marks = Grid::from_fn(puzzle.width(), puzzle.height(), |pos| {
            CellStatus::from_filled(puzzle.image()[pos])
        });
        assert!(puzzle.is_complete(&marks));
    }

    proptest! {
        #[test]
        fn prop_hints_sum_matches_filled_count(
            rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 5), 4)
        ) {
            let image = Grid::from_rows(rows);
            let filled = image.iter().filter(|&(_, &cell)| cell).count();
            let puzzle = Puzzle::from_image(image);

            let column_total: usize = puzzle
                .column_hints()
                .iter()
                .flat_map(|hints| hints.iter().copied())
                .sum();
            let row_total: usize = puzzle
                .row_hints()
                .iter()
                .flat_map(|hints| hints.iter().copied())
                .sum();

            prop_assert_eq!(column_total, filled);
            prop_assert_eq!(row_total, filled);
        }

        #[test]
        fn prop_hints_are_positive_or_lone_zero(
            rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 6), 3)
        ) {
            let puzzle = Puzzle::from_image(Grid::from_rows(rows));
            for hints in puzzle.column_hints().iter().chain(puzzle.row_hints()) {
                if matches!(hints.as_slice(), [0]) {
                    continue;
                }
                prop_assert!(hints.iter().all(|&run| run > 0));
            }
        }
    }
}
