//! The action log: the only way an attempt changes.

use log::debug;
use nonolace_core::{CellStatus, Puzzle};
use nonolace_solver::AttemptAction;

use crate::{Attempt, GameError};

/// Applies one action to an attempt, returning the updated attempt.
///
/// A [`Mark`](AttemptAction::Mark) fills the cell if the solution image has a
/// mark there. If it does not, the action is a wrong guess: the attempt gets
/// an [`IncorrectMark`](crate::IncorrectMark) entry, the escalating time
/// penalty is deducted, and the cell is left untouched. An
/// [`Unmark`](AttemptAction::Unmark) always sets the cell to
/// [`Empty`](CellStatus::Empty).
///
/// # Errors
///
/// - [`GameError::OutOfBounds`] if the coordinate is outside the grid.
/// - [`GameError::AlreadyMarked`] if a mark targets a cell that is already
///   filled.
///
/// # Examples
///
/// ```
/// use nonolace_core::{Grid, Position, Puzzle};
/// use nonolace_game::{Attempt, apply_attempt_action};
/// use nonolace_solver::AttemptAction;
///
/// let puzzle = Puzzle::from_image(Grid::parse_image("#.")?);
/// let attempt = Attempt::new(&puzzle);
///
/// // Correct mark: the cell is filled.
/// let attempt = apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(Position::new(0, 0)))?;
/// assert!(attempt.marks()[Position::new(0, 0)].is_filled());
///
/// // Wrong mark: recorded and penalized, but the cell stays undecided.
/// let attempt = apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(Position::new(1, 0)))?;
/// assert!(attempt.marks()[Position::new(1, 0)].is_unknown());
/// assert_eq!(attempt.incorrect_marks().len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn apply_attempt_action(
    puzzle: &Puzzle,
    attempt: &Attempt,
    action: AttemptAction,
) -> Result<Attempt, GameError> {
    let coordinate = action.coordinate();
    if !attempt.marks().contains(coordinate) {
        return Err(GameError::OutOfBounds { coordinate });
    }

    match action {
        AttemptAction::Mark { coordinate } => {
            if attempt.marks()[coordinate].is_filled() {
                return Err(GameError::AlreadyMarked { coordinate });
            }
            if !puzzle.image()[coordinate] {
                debug!("incorrect mark at {coordinate}");
                return Ok(attempt.with_incorrect_mark(coordinate));
            }
            Ok(attempt.with_cell(coordinate, CellStatus::Filled))
        }
        AttemptAction::Unmark { coordinate } => {
            Ok(attempt.with_cell(coordinate, CellStatus::Empty))
        }
    }
}

/// Applies a list of actions in order, threading the attempt value through.
///
/// # Errors
///
/// Stops at the first failing action with its [`GameError`].
pub fn apply_attempt_actions(
    puzzle: &Puzzle,
    attempt: &Attempt,
    actions: &[AttemptAction],
) -> Result<Attempt, GameError> {
    let mut attempt = attempt.clone();
    for &action in actions {
        attempt = apply_attempt_action(puzzle, &attempt, action)?;
    }
    Ok(attempt)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use nonolace_core::{Grid, Position};

    use super::*;
    use crate::INITIAL_TIME_BUDGET;

    fn puzzle() -> Puzzle {
        Puzzle::from_image(
            Grid::parse_image(
                "
                #.
                .#
                ",
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_correct_mark_fills_cell() {
        let puzzle = puzzle();
        let attempt = Attempt::new(&puzzle);
        let pos = Position::new(0, 0);

        let attempt = apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(pos)).unwrap();
        assert_eq!(attempt.marks()[pos], CellStatus::Filled);
        assert!(attempt.incorrect_marks().is_empty());
        assert_eq!(attempt.time_remaining(), INITIAL_TIME_BUDGET);
    }

    #[test]
    fn test_wrong_mark_is_penalized_not_applied() {
        let puzzle = puzzle();
        let attempt = Attempt::new(&puzzle);
        let pos = Position::new(1, 0);

        let attempt = apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(pos)).unwrap();
        assert_eq!(attempt.marks()[pos], CellStatus::Unknown);
        assert_eq!(attempt.incorrect_marks().len(), 1);
        assert_eq!(attempt.incorrect_marks()[0].position, pos);
        assert_eq!(
            attempt.time_remaining(),
            INITIAL_TIME_BUDGET - Duration::from_secs(2 * 60)
        );
    }

    #[test]
    fn test_unmark_always_sets_empty() {
        let puzzle = puzzle();
        let attempt = Attempt::new(&puzzle);

        // Even a cell the image fills can be crossed out by an unmark; the
        // action log does not second-guess it.
        let pos = Position::new(0, 0);
        let attempt = apply_attempt_action(&puzzle, &attempt, AttemptAction::unmark(pos)).unwrap();
        assert_eq!(attempt.marks()[pos], CellStatus::Empty);
        assert!(attempt.incorrect_marks().is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let puzzle = puzzle();
        let attempt = Attempt::new(&puzzle);
        let pos = Position::new(2, 0);

        assert_eq!(
            apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(pos)),
            Err(GameError::OutOfBounds { coordinate: pos })
        );
        assert_eq!(
            apply_attempt_action(&puzzle, &attempt, AttemptAction::unmark(pos)),
            Err(GameError::OutOfBounds { coordinate: pos })
        );
    }

    #[test]
    fn test_marking_twice_is_an_error() {
        let puzzle = puzzle();
        let attempt = Attempt::new(&puzzle);
        let pos = Position::new(0, 0);

        let attempt = apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(pos)).unwrap();
        assert_eq!(
            apply_attempt_action(&puzzle, &attempt, AttemptAction::mark(pos)),
            Err(GameError::AlreadyMarked { coordinate: pos })
        );
    }

    #[test]
    fn test_actions_apply_in_order() {
        let puzzle = puzzle();
        let attempt = Attempt::new(&puzzle);
        let actions = [
            AttemptAction::mark(Position::new(0, 0)),
            AttemptAction::unmark(Position::new(1, 0)),
            AttemptAction::unmark(Position::new(0, 1)),
            AttemptAction::mark(Position::new(1, 1)),
        ];

        let attempt = apply_attempt_actions(&puzzle, &attempt, &actions).unwrap();
        assert!(puzzle.is_complete(attempt.marks()));
    }
}
