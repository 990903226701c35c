//! Solver error types.

use crate::LineRef;

/// Errors surfaced by the solving engine.
///
/// All variants are fatal: they indicate either a caller bug (stepping a
/// finished attempt) or corrupted puzzle/attempt data (a line whose known
/// cells contradict its hints). None of them is a recoverable game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The attempt already matches the solution image; there is nothing left
    /// to deduce.
    #[display("attempt is already complete")]
    AlreadyComplete,
    /// No arrangement of the line's hint runs is consistent with its known
    /// cells. The marks contradict the puzzle.
    #[display("no valid permutations for {line}")]
    NoLinePermutations {
        /// The contradictory line.
        line: LineRef,
    },
    /// The probability map contains no undecided cell to act on.
    #[display("no undecided cell to choose from")]
    NoCandidateCell,
}
