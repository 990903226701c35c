//! The solving state machine: check-line passes alternating with single
//! probability guesses.

use log::debug;
use nonolace_core::{CellStatus, Grid, Puzzle};

use crate::{
    AttemptAction, CheckLineState, CheckLineStep, ProbabilityState, SolverError,
    check_line::solve_check_line_step, probability::choose_probability_action,
};

/// Where the solving process currently stands.
///
/// The state is a plain value handed back to the caller after every step;
/// nothing is captured implicitly, so a solve can be suspended, inspected,
/// or resumed against an updated attempt at any time.
#[derive(Debug, Clone, derive_more::IsVariant)]
pub enum SolverState {
    /// Deterministic deduction over the queued dirty lines.
    CheckLine(CheckLineState),
    /// Deterministic deduction is exhausted; a confidence map has been
    /// computed and one action will be taken from it.
    Probability(ProbabilityState),
}

/// The outcome of one solving step.
#[derive(Debug, Clone)]
pub struct SolveStep {
    /// Actions to apply to the attempt, in order. May be empty (a line that
    /// pinned nothing down, or the hand-off to probability solving).
    pub actions: Vec<AttemptAction>,
    /// The state to pass to the next step, after the actions were applied.
    pub state: SolverState,
}

/// Begins solving a puzzle: a check-line pass over every column, then every
/// row.
#[must_use]
pub fn start_solving(puzzle: &Puzzle) -> SolverState {
    SolverState::CheckLine(CheckLineState::start(puzzle))
}

/// Advances the solving process by one step.
///
/// In the check-line state one dirty line is processed; when the queue runs
/// dry the solver computes a probability map and hands back zero actions for
/// that step. In the probability state exactly one action is chosen (a
/// certainty if one exists, otherwise the best guess) and the state returns
/// to a full check-line pass, since a single new fact can unlock a cascade of
/// line deductions. Certain deductions therefore always run to exhaustion
/// before any guess is made.
///
/// The caller owns the loop: it applies the returned actions to its attempt,
/// checks completion, and passes the updated marks together with the new
/// state into the next call.
///
/// # Errors
///
/// - [`SolverError::AlreadyComplete`] if `marks` already match the solution
///   image; stepping a finished attempt is a caller bug.
/// - [`SolverError::NoLinePermutations`] if the marks contradict the puzzle.
/// - [`SolverError::NoCandidateCell`] if a probability map holds no
///   undecided cell.
pub fn solve_next_step(
    puzzle: &Puzzle,
    marks: &Grid<CellStatus>,
    state: SolverState,
) -> Result<SolveStep, SolverError> {
    if puzzle.is_complete(marks) {
        return Err(SolverError::AlreadyComplete);
    }

    match state {
        SolverState::CheckLine(check) => match solve_check_line_step(puzzle, marks, check)? {
            Some(CheckLineStep { actions, state }) => Ok(SolveStep {
                actions,
                state: SolverState::CheckLine(state),
            }),
            None => {
                debug!("check-line solving exhausted, computing probabilities");
                let probability = ProbabilityState::start(puzzle, marks)?;
                Ok(SolveStep {
                    actions: Vec::new(),
                    state: SolverState::Probability(probability),
                })
            }
        },
        SolverState::Probability(probability) => {
            let action = choose_probability_action(&probability)?;
            debug!("probability step chose {action:?}");
            Ok(SolveStep {
                actions: vec![action],
                state: SolverState::CheckLine(CheckLineState::start(puzzle)),
            })
        }
    }
}
