//! The mutable side of a puzzle: marks, mistakes, and the time budget.

use std::time::Duration;

use nonolace_core::{CellStatus, Grid, Position, Puzzle};

/// The time a fresh attempt starts with.
pub const INITIAL_TIME_BUDGET: Duration = Duration::from_secs(30 * 60);

/// A recorded wrong guess: the cell that was marked and the time it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncorrectMark {
    /// The cell that was wrongly marked.
    pub position: Position,
    /// The time deducted for this mistake.
    pub penalty: Duration,
}

/// One attempt at solving a puzzle.
///
/// An attempt is a value: operations return a new attempt instead of mutating
/// the old one, so callers can keep any intermediate state alive (for undo,
/// for driving the solver, for rendering a replay). It is created fresh per
/// puzzle with [`Attempt::new`] and changed exclusively through
/// [`apply_attempt_action`](crate::apply_attempt_action).
///
/// The mark grid always has the puzzle's dimensions; the incorrect-mark list
/// is in chronological order.
///
/// # Examples
///
/// ```
/// use nonolace_core::{Grid, Puzzle};
/// use nonolace_game::{Attempt, INITIAL_TIME_BUDGET};
///
/// let puzzle = Puzzle::from_image(Grid::parse_image("#.")?);
/// let attempt = Attempt::new(&puzzle);
///
/// assert!(attempt.marks().iter().all(|(_, cell)| cell.is_unknown()));
/// assert!(attempt.incorrect_marks().is_empty());
/// assert_eq!(attempt.time_remaining(), INITIAL_TIME_BUDGET);
/// # Ok::<(), nonolace_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    marks: Grid<CellStatus>,
    incorrect_marks: Vec<IncorrectMark>,
    time_remaining: Duration,
}

impl Attempt {
    /// Creates a fresh attempt for a puzzle: every cell undecided, no
    /// mistakes, the full time budget.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        Self {
            marks: Grid::new(puzzle.width(), puzzle.height(), CellStatus::Unknown),
            incorrect_marks: Vec::new(),
            time_remaining: INITIAL_TIME_BUDGET,
        }
    }

    /// Returns the current mark grid.
    #[must_use]
    #[inline]
    pub fn marks(&self) -> &Grid<CellStatus> {
        &self.marks
    }

    /// Returns every wrong mark so far, oldest first.
    #[must_use]
    #[inline]
    pub fn incorrect_marks(&self) -> &[IncorrectMark] {
        &self.incorrect_marks
    }

    /// Returns the remaining time budget.
    #[must_use]
    #[inline]
    pub fn time_remaining(&self) -> Duration {
        self.time_remaining
    }

    /// Returns `true` once the time budget is used up.
    #[must_use]
    #[inline]
    pub fn is_out_of_time(&self) -> bool {
        self.time_remaining.is_zero()
    }

    /// Returns an attempt with `elapsed` deducted from the time budget,
    /// saturating at zero.
    ///
    /// This is the per-tick clock the surrounding game advances; penalties
    /// for wrong marks are deducted separately when the action is applied.
    #[must_use]
    pub fn progress_time(&self, elapsed: Duration) -> Self {
        Self {
            time_remaining: self.time_remaining.saturating_sub(elapsed),
            ..self.clone()
        }
    }

    /// Returns an attempt with one cell set to the given status.
    pub(crate) fn with_cell(&self, position: Position, status: CellStatus) -> Self {
        let mut marks = self.marks.clone();
        marks[position] = status;
        Self {
            marks,
            ..self.clone()
        }
    }

    /// Returns an attempt with a wrong mark recorded and its penalty
    /// deducted, saturating at zero.
    pub(crate) fn with_incorrect_mark(&self, position: Position) -> Self {
        let penalty = incorrect_mark_penalty(self.incorrect_marks.len());
        let mut incorrect_marks = self.incorrect_marks.clone();
        incorrect_marks.push(IncorrectMark { position, penalty });
        Self {
            marks: self.marks.clone(),
            incorrect_marks,
            time_remaining: self.time_remaining.saturating_sub(penalty),
        }
    }
}

/// The penalty for the next wrong mark: two minutes, then four, then eight
/// for every further mistake.
fn incorrect_mark_penalty(previous_incorrect_marks: usize) -> Duration {
    match previous_incorrect_marks {
        0 => Duration::from_secs(2 * 60),
        1 => Duration::from_secs(4 * 60),
        _ => Duration::from_secs(8 * 60),
    }
}
