//! Deterministic line solving driven by a dirty-line queue.

use std::collections::VecDeque;

use log::trace;
use nonolace_core::{CellStatus, Grid, Puzzle};

use crate::{AttemptAction, LineRef, SolverError, enumerate_line_permutations};

/// State of the check-line solver: the lines awaiting (re-)examination.
///
/// The queue is processed first-in first-out and never holds the same line
/// twice. A line becomes dirty when a cell inside it changes; it is removed
/// when it is popped for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLineState {
    dirty_lines: VecDeque<LineRef>,
}

impl CheckLineState {
    /// Seeds the queue with every line of the puzzle: all columns in
    /// ascending order, then all rows in ascending order.
    #[must_use]
    pub fn start(puzzle: &Puzzle) -> Self {
        let dirty_lines = (0..puzzle.width())
            .map(LineRef::column)
            .chain((0..puzzle.height()).map(LineRef::row))
            .collect();
        Self { dirty_lines }
    }

    /// Returns the lines still awaiting examination, front first.
    #[must_use]
    pub fn dirty_lines(&self) -> &VecDeque<LineRef> {
        &self.dirty_lines
    }
}

/// The outcome of one check-line step: deduced actions and the successor
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckLineStep {
    /// Actions for every cell the processed line's permutations agree on.
    pub actions: Vec<AttemptAction>,
    /// The state to use for the next step.
    pub state: CheckLineState,
}

/// Processes the front dirty line and deduces every cell it pins down.
///
/// The line's permutations (consistent with its hints and with the current
/// marks) are intersected position by position: where all permutations agree
/// and the mark grid is still undecided, a [`Mark`](AttemptAction::Mark) or
/// [`Unmark`](AttemptAction::Unmark) action is emitted. A line without
/// undecided cells is skipped without enumeration. For every emitted action
/// the orthogonal line through its coordinate becomes dirty, deduplicated
/// against the lines already queued.
///
/// Returns `Ok(None)` when the queue is exhausted: no line is left to examine
/// and the step deduced nothing, so check-line solving can make no further
/// progress on these marks.
///
/// A step never un-decides or rewrites a known cell; it only narrows
/// [`Unknown`](CellStatus::Unknown) cells, and only to values consistent with
/// everything known so far.
///
/// # Errors
///
/// Returns [`SolverError::NoLinePermutations`] if a line's known cells
/// contradict its hints, which means the marks or the puzzle are corrupt.
pub fn solve_check_line_step(
    puzzle: &Puzzle,
    marks: &Grid<CellStatus>,
    state: CheckLineState,
) -> Result<Option<CheckLineStep>, SolverError> {
    let CheckLineState { mut dirty_lines } = state;
    let Some(line) = dirty_lines.pop_front() else {
        return Ok(None);
    };

    let cells = line.cells(marks);
    let actions = if cells.iter().all(|cell| cell.is_known()) {
        Vec::new()
    } else {
        let permutations = enumerate_line_permutations(line.hints(puzzle), &cells);
        if permutations.is_empty() {
            return Err(SolverError::NoLinePermutations { line });
        }
        deduce_line_actions(line, &cells, &permutations)
    };
    trace!("{line}: deduced {} action(s)", actions.len());

    for action in &actions {
        let crossing = line.crossing(action.coordinate());
        if !dirty_lines.contains(&crossing) {
            dirty_lines.push_back(crossing);
        }
    }

    if dirty_lines.is_empty() {
        // A step that deduced anything dirties at least one crossing line.
        debug_assert!(actions.is_empty());
        return Ok(None);
    }
    Ok(Some(CheckLineStep {
        actions,
        state: CheckLineState { dirty_lines },
    }))
}

/// Emits an action for every still-undecided cell on which all permutations
/// agree.
fn deduce_line_actions(
    line: LineRef,
    cells: &[CellStatus],
    permutations: &[Vec<bool>],
) -> Vec<AttemptAction> {
    let first = &permutations[0];
    let mut actions = Vec::new();
    for (i, cell) in cells.iter().enumerate() {
        if cell.is_known() {
            continue;
        }
        let filled = first[i];
        if permutations[1..].iter().all(|perm| perm[i] == filled) {
            let coordinate = line.coordinate(i);
            let action = if filled {
                AttemptAction::mark(coordinate)
            } else {
                AttemptAction::unmark(coordinate)
            };
            actions.push(action);
        }
    }
    actions
}
