//! Driving the solving engine against an attempt.

use log::debug;
use nonolace_core::Puzzle;
use nonolace_solver::{AttemptAction, SolveStep, SolverState, solve_next_step, start_solving};

use crate::{Attempt, SessionError, apply_attempt_actions};

/// What one session step produced.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum SessionOutcome {
    /// The solver ran one step; its actions were applied to the attempt.
    InProgress {
        /// The actions that were applied (possibly none).
        actions: Vec<AttemptAction>,
    },
    /// The attempt's marks match the solution image.
    Completed,
    /// The attempt's time budget is used up.
    OutOfTime,
}

/// A solver-driven attempt at a puzzle.
///
/// The session owns an [`Attempt`] and the engine's [`SolverState`] and plays
/// the caller role the stepping protocol expects: check for a terminal
/// condition, request one step, apply the returned actions through the action
/// log, store the new state. Each call to [`SolveSession::step`] performs
/// exactly one such round, so a UI can animate deductions one at a time; a
/// wrong probability guess costs time like any player mistake, which is what
/// eventually ends sessions on puzzles the engine cannot crack.
///
/// # Examples
///
/// ```
/// use nonolace_core::{Grid, Puzzle};
/// use nonolace_game::{SessionOutcome, SolveSession};
///
/// let puzzle = Puzzle::from_image(Grid::parse_image(
///     "
///     ###
///     #.
///     ",
/// )?);
/// let mut session = SolveSession::new(&puzzle);
///
/// while session.step(&puzzle)?.is_in_progress() {}
/// assert!(puzzle.is_complete(session.attempt().marks()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SolveSession {
    attempt: Attempt,
    state: SolverState,
}

impl SolveSession {
    /// Starts a session with a fresh attempt and a seeded solver.
    #[must_use]
    pub fn new(puzzle: &Puzzle) -> Self {
        Self {
            attempt: Attempt::new(puzzle),
            state: start_solving(puzzle),
        }
    }

    /// Returns the attempt as the session currently sees it.
    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// Returns the solver's current state.
    #[must_use]
    pub fn solver_state(&self) -> &SolverState {
        &self.state
    }

    /// Performs one solving round: terminal check, one solver step, action
    /// application.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the solver reports corrupted state or an
    /// applied action is invalid. Neither happens when the session is the
    /// only writer of the attempt.
    pub fn step(&mut self, puzzle: &Puzzle) -> Result<SessionOutcome, SessionError> {
        if puzzle.is_complete(self.attempt.marks()) {
            return Ok(SessionOutcome::Completed);
        }
        if self.attempt.is_out_of_time() {
            return Ok(SessionOutcome::OutOfTime);
        }

        let SolveStep { actions, state } =
            solve_next_step(puzzle, self.attempt.marks(), self.state.clone())?;
        self.attempt = apply_attempt_actions(puzzle, &self.attempt, &actions)?;
        self.state = state;
        Ok(SessionOutcome::InProgress { actions })
    }

    /// Steps until the session reaches a terminal outcome.
    ///
    /// This always terminates: every round either removes a line from the
    /// dirty queue, decides an undecided cell, or (for a wrong guess) burns
    /// part of the finite time budget.
    ///
    /// # Errors
    ///
    /// Returns the first [`SessionError`] a step produces.
    pub fn run(&mut self, puzzle: &Puzzle) -> Result<SessionOutcome, SessionError> {
        let mut rounds = 0_usize;
        loop {
            let outcome = self.step(puzzle)?;
            match outcome {
                SessionOutcome::InProgress { .. } => {
                    rounds += 1;
                }
                SessionOutcome::Completed | SessionOutcome::OutOfTime => {
                    debug!("session finished after {rounds} round(s): {outcome:?}");
                    return Ok(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use nonolace_core::{CellStatus, Grid};

    use super::*;

    fn puzzle_from(text: &str) -> Puzzle {
        Puzzle::from_image(Grid::parse_image(text).unwrap())
    }

    #[test]
    fn test_completed_session_reports_completed() {
        let puzzle = puzzle_from(
            "
            ###
            #..
            #.#
            ",
        );
        let mut session = SolveSession::new(&puzzle);
        let outcome = session.run(&puzzle).unwrap();

        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(puzzle.is_complete(session.attempt().marks()));
        // A line-solvable puzzle needs no guesses, so no penalties either.
        assert!(session.attempt().incorrect_marks().is_empty());

        // Stepping again is a no-op terminal report, not an error.
        assert_eq!(session.step(&puzzle).unwrap(), SessionOutcome::Completed);
    }

    #[test]
    fn test_session_applies_actions_to_attempt() {
        let puzzle = puzzle_from(
            "
            #
            #
            ",
        );
        let mut session = SolveSession::new(&puzzle);

        let outcome = session.step(&puzzle).unwrap();
        let SessionOutcome::InProgress { actions } = outcome else {
            panic!("first step should progress");
        };
        assert_eq!(actions.len(), 2);
        assert!(
            session
                .attempt()
                .marks()
                .iter()
                .all(|(_, cell)| cell.is_filled())
        );
    }

    #[test]
    fn test_guessing_puzzle_completes_via_probability() {
        // Check-line deduces nothing here; the first guess in scan order is
        // correct and unlocks the rest.
        let puzzle = puzzle_from(
            "
            #.
            .#
            ",
        );
        let mut session = SolveSession::new(&puzzle);
        let outcome = session.run(&puzzle).unwrap();

        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(session.attempt().incorrect_marks().is_empty());
        assert_eq!(
            session.attempt().marks().to_string(),
            "#.\n.#".to_string()
        );
    }

    #[test]
    fn test_out_of_time_is_terminal() {
        let puzzle = puzzle_from(
            "
            #.
            .#
            ",
        );
        let mut session = SolveSession::new(&puzzle);
        session.attempt = session.attempt.progress_time(crate::INITIAL_TIME_BUDGET);

        assert_eq!(session.step(&puzzle).unwrap(), SessionOutcome::OutOfTime);
        assert!(
            session
                .attempt()
                .marks()
                .iter()
                .all(|(_, cell)| cell == &CellStatus::Unknown)
        );
    }
}
