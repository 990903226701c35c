//! Per-cell fill-probability estimation, the fallback when deterministic
//! deduction stalls.

use log::trace;
use nonolace_core::{CellStatus, Grid, Position, Puzzle};

use crate::{AttemptAction, LineRef, SolverError, enumerate_line_permutations};

/// A confidence map over the still-undecided cells of an attempt.
///
/// For every undecided cell the map holds the estimated probability, in
/// `[0, 1]`, that the cell is filled; cells already decided in the marks hold
/// `None`. Probabilities of exactly `0` or `1` are certainties in disguise,
/// and [`choose_probability_action`] resolves those before guessing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityState {
    probabilities: Grid<Option<f64>>,
}

impl ProbabilityState {
    /// Estimates fill probabilities for every undecided cell.
    ///
    /// Each column's and each row's permutations are enumerated against the
    /// current marks; a line's per-cell probability is the fraction of its
    /// permutations that fill the cell. The column and row estimates for a
    /// cell are then combined: `0` from either side wins (the cell is
    /// certainly empty), otherwise `1` from either side wins (certainly
    /// filled), otherwise the larger of the two is kept. Taking the maximum
    /// overstates the true joint probability; the estimate deliberately
    /// trusts whichever dimension is more confident.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoLinePermutations`] if any line's known cells
    /// contradict its hints.
    pub fn start(puzzle: &Puzzle, marks: &Grid<CellStatus>) -> Result<Self, SolverError> {
        let column_probabilities = (0..puzzle.width())
            .map(|x| line_fill_probabilities(LineRef::column(x), puzzle, marks))
            .collect::<Result<Vec<_>, _>>()?;
        let row_probabilities = (0..puzzle.height())
            .map(|y| line_fill_probabilities(LineRef::row(y), puzzle, marks))
            .collect::<Result<Vec<_>, _>>()?;

        let probabilities = Grid::from_fn(puzzle.width(), puzzle.height(), |pos| {
            marks[pos].is_unknown().then(|| {
                combine(
                    column_probabilities[pos.x()][pos.y()],
                    row_probabilities[pos.y()][pos.x()],
                )
            })
        });
        Ok(Self { probabilities })
    }

    /// Returns the confidence map; `None` marks an already-decided cell.
    #[must_use]
    pub fn probabilities(&self) -> &Grid<Option<f64>> {
        &self.probabilities
    }
}

/// The fraction of the line's permutations that fill each cell.
fn line_fill_probabilities(
    line: LineRef,
    puzzle: &Puzzle,
    marks: &Grid<CellStatus>,
) -> Result<Vec<f64>, SolverError> {
    let cells = line.cells(marks);
    let permutations = enumerate_line_permutations(line.hints(puzzle), &cells);
    if permutations.is_empty() {
        return Err(SolverError::NoLinePermutations { line });
    }
    #[expect(clippy::cast_precision_loss)]
    let total = permutations.len() as f64;
    #[expect(clippy::cast_precision_loss)]
    let probabilities = (0..cells.len())
        .map(|i| {
            let filled = permutations.iter().filter(|perm| perm[i]).count();
            filled as f64 / total
        })
        .collect();
    Ok(probabilities)
}

fn combine(column: f64, row: f64) -> f64 {
    if column <= 0.0 || row <= 0.0 {
        0.0
    } else if column >= 1.0 || row >= 1.0 {
        1.0
    } else {
        column.max(row)
    }
}

/// Picks the single best action from a probability map.
///
/// Certainties come first: the first cell (in scan order) whose probability
/// is exactly `0` or `1` yields an [`Unmark`](AttemptAction::Unmark) or
/// [`Mark`](AttemptAction::Mark) that is guaranteed correct. Only when no
/// certainty is left does this guess, marking the cell with the strictly
/// highest probability (ties broken by scan order). A guess can be wrong;
/// applying it is where a time penalty may be incurred.
///
/// # Errors
///
/// Returns [`SolverError::NoCandidateCell`] if the map holds no undecided
/// cell at all.
pub fn choose_probability_action(state: &ProbabilityState) -> Result<AttemptAction, SolverError> {
    // Certain cells first: probability 0 or 1 is a deduction, not a guess.
    for (pos, &probability) in state.probabilities.iter() {
        match probability {
            Some(p) if p <= 0.0 => {
                trace!("certainly empty: {pos}");
                return Ok(AttemptAction::unmark(pos));
            }
            Some(p) if p >= 1.0 => {
                trace!("certainly filled: {pos}");
                return Ok(AttemptAction::mark(pos));
            }
            _ => {}
        }
    }

    let mut best: Option<(Position, f64)> = None;
    for (pos, &probability) in state.probabilities.iter() {
        if let Some(p) = probability
            && best.is_none_or(|(_, current)| p > current)
        {
            best = Some((pos, p));
        }
    }
    let (pos, p) = best.ok_or(SolverError::NoCandidateCell)?;
    trace!("best guess: {pos} at probability {p:.3}");
    Ok(AttemptAction::mark(pos))
}
