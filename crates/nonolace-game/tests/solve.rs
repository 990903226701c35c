//! End-to-end solving behavior across the engine and the game layer.

use nonolace_core::{CellStatus, Grid, Puzzle};
use nonolace_game::{Attempt, SessionOutcome, SolveSession, apply_attempt_actions};
use nonolace_solver::{SolveStep, solve_next_step, start_solving};

fn puzzle_from(text: &str) -> Puzzle {
    Puzzle::from_image(Grid::parse_image(text).unwrap())
}

fn assert_marks_match_image(puzzle: &Puzzle, marks: &Grid<CellStatus>) {
    for (pos, &filled) in puzzle.image().iter() {
        assert_eq!(marks[pos], CellStatus::from_filled(filled), "cell {pos}");
    }
}

#[test]
fn test_box_puzzle_solves_without_guesses() {
    let puzzle = puzzle_from(
        "
        #####
        #...#
        #...#
        #...#
        #####
        ",
    );
    let mut session = SolveSession::new(&puzzle);
    let outcome = session.run(&puzzle).unwrap();

    assert_eq!(outcome, SessionOutcome::Completed);
    assert_marks_match_image(&puzzle, session.attempt().marks());
    // Pure deduction: no penalties, full time budget left.
    assert!(session.attempt().incorrect_marks().is_empty());
    assert_eq!(
        session.attempt().time_remaining(),
        nonolace_game::INITIAL_TIME_BUDGET
    );
}

#[test]
fn test_guess_dependent_puzzle_completes() {
    // Every line hint is [1], so deterministic deduction stalls immediately;
    // the scan-order guess lands on (0, 0), which this image fills.
    let puzzle = puzzle_from(
        "
        #.
        .#
        ",
    );
    let mut session = SolveSession::new(&puzzle);
    let outcome = session.run(&puzzle).unwrap();

    assert_eq!(outcome, SessionOutcome::Completed);
    assert_marks_match_image(&puzzle, session.attempt().marks());
    assert!(session.attempt().incorrect_marks().is_empty());
}

#[test]
fn test_ambiguous_puzzle_runs_out_of_time() {
    // The anti-diagonal: the stalled engine keeps guessing (0, 0), which this
    // image does not fill. Each wrong guess burns a growing penalty until the
    // 30 minute budget is gone: 2 + 4 + 8 + 8 + 8 minutes.
    let puzzle = puzzle_from(
        "
        .#
        #.
        ",
    );
    let mut session = SolveSession::new(&puzzle);
    let outcome = session.run(&puzzle).unwrap();

    assert_eq!(outcome, SessionOutcome::OutOfTime);
    assert_eq!(session.attempt().incorrect_marks().len(), 5);
    assert!(
        session
            .attempt()
            .incorrect_marks()
            .iter()
            .all(|mark| !puzzle.image()[mark.position])
    );
    // Wrong guesses never touch the grid.
    assert!(
        session
            .attempt()
            .marks()
            .iter()
            .all(|(_, cell)| cell.is_unknown())
    );
}

#[test]
fn test_full_solve_only_narrows_unknown_cells() {
    // Deterministic deduction stalls on the corners; one correct guess at
    // (0, 0) unlocks the rest, so the run exercises both solver states.
    let puzzle = puzzle_from(
        "
        ##.
        .#.
        ..#
        ",
    );
    let mut attempt = Attempt::new(&puzzle);
    let mut state = start_solving(&puzzle);
    let mut steps = 0;

    while !puzzle.is_complete(attempt.marks()) {
        let SolveStep { actions, state: next } =
            solve_next_step(&puzzle, attempt.marks(), state).unwrap();
        for action in &actions {
            // Deductions and guesses alike only ever target undecided cells.
            assert!(attempt.marks()[action.coordinate()].is_unknown());
        }
        let next_attempt = apply_attempt_actions(&puzzle, &attempt, &actions).unwrap();
        // Nothing that was known gets rewritten.
        for (pos, cell) in attempt.marks().iter() {
            if cell.is_known() {
                assert_eq!(next_attempt.marks()[pos], *cell);
            }
        }
        attempt = next_attempt;
        state = next;
        steps += 1;
        assert!(steps < 10_000, "solve does not terminate");
    }

    assert_marks_match_image(&puzzle, attempt.marks());
}
