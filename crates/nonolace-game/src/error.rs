//! Game-side error types.

use nonolace_core::Position;
use nonolace_solver::SolverError;

/// Errors raised when applying an action to an attempt.
///
/// Both variants are caller bugs: a wrong guess is *not* an error (it is
/// recorded with a penalty instead).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The action's coordinate lies outside the puzzle grid.
    #[display("coordinate {coordinate} is outside the puzzle grid")]
    OutOfBounds {
        /// The offending coordinate.
        coordinate: Position,
    },
    /// The cell is already marked filled; marking it again is meaningless.
    #[display("cell {coordinate} is already marked")]
    AlreadyMarked {
        /// The offending coordinate.
        coordinate: Position,
    },
}

/// Errors raised while driving a solve session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// The solving engine failed.
    #[display("solver error: {_0}")]
    Solver(SolverError),
    /// Applying a solver action to the attempt failed.
    #[display("game error: {_0}")]
    Game(GameError),
}
