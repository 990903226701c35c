//! Deduction engine for nonogram (picture-logic) puzzles.
//!
//! This crate implements the two solving algorithms and the stepping protocol
//! that drives them:
//!
//! 1. **Check-line solving**, the deterministic half. Every placement of a
//!    line's hint runs consistent with the already-known cells is enumerated
//!    ([`enumerate_line_permutations`]); cells on which *all* placements agree
//!    are deducible. A dirty-line queue ([`CheckLineState`]) tracks which
//!    lines must be re-examined after a change.
//! 2. **Probability solving**, the heuristic fallback. When check-line solving
//!    has nothing left to deduce, [`ProbabilityState`] estimates per cell the
//!    fraction of line placements that fill it and the single best guess is
//!    taken ([`choose_probability_action`]).
//!
//! The two are composed by [`solve_next_step`] into a strict alternation:
//! certain deductions always run to exhaustion before a single guess is made,
//! and every guess re-seeds the deterministic pass. Each step is a pure
//! function from `(puzzle, marks, state)` to `(actions, new state)`; the
//! caller owns both the marks and the [`SolverState`] and decides when (and
//! whether) to request the next step.
//!
//! # Examples
//!
//! Driving the solver to completion by applying its actions to a mark grid:
//!
//! ```
//! use nonolace_core::{CellStatus, Grid, Puzzle};
//! use nonolace_solver::{SolveStep, solve_next_step, start_solving};
//!
//! let puzzle = Puzzle::from_image(Grid::parse_image(
//!     "
//!     ####
//!     #..
//!     #..
//!     ",
//! )?);
//! let mut marks = Grid::new(puzzle.width(), puzzle.height(), CellStatus::Unknown);
//! let mut state = start_solving(&puzzle);
//!
//! while !puzzle.is_complete(&marks) {
//!     let SolveStep { actions, state: next } = solve_next_step(&puzzle, &marks, state)?;
//!     for action in actions {
//!         marks[action.coordinate()] = CellStatus::from_filled(action.is_mark());
//!     }
//!     state = next;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    action::AttemptAction,
    check_line::{CheckLineState, CheckLineStep, solve_check_line_step},
    error::SolverError,
    line::{LineKind, LineRef},
    permutation::enumerate_line_permutations,
    probability::{ProbabilityState, choose_probability_action},
    solve::{SolveStep, SolverState, solve_next_step, start_solving},
};

mod action;
mod check_line;
mod error;
mod line;
mod permutation;
mod probability;
mod solve;
