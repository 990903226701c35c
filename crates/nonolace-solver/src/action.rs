//! Attempt actions emitted by the solver.

use nonolace_core::Position;

/// A single discrete change to an attempt's mark grid.
///
/// Actions are the only unit of mutation the engine knows: the solver emits
/// them and the game layer applies them to an attempt. A `Mark` claims the
/// cell is part of the picture; an `Unmark` crosses it out.
///
/// # Examples
///
/// ```
/// use nonolace_core::Position;
/// use nonolace_solver::AttemptAction;
///
/// let action = AttemptAction::mark(Position::new(2, 0));
/// assert!(action.is_mark());
/// assert_eq!(action.coordinate(), Position::new(2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum AttemptAction {
    /// Claim the cell at `coordinate` is part of the picture.
    Mark {
        /// The cell the action applies to.
        coordinate: Position,
    },
    /// Cross out the cell at `coordinate`.
    Unmark {
        /// The cell the action applies to.
        coordinate: Position,
    },
}

impl AttemptAction {
    /// Creates a mark action for the given cell.
    #[must_use]
    #[inline]
    pub const fn mark(coordinate: Position) -> Self {
        Self::Mark { coordinate }
    }

    /// Creates an unmark action for the given cell.
    #[must_use]
    #[inline]
    pub const fn unmark(coordinate: Position) -> Self {
        Self::Unmark { coordinate }
    }

    /// Returns the cell the action applies to.
    #[must_use]
    #[inline]
    pub const fn coordinate(self) -> Position {
        match self {
            Self::Mark { coordinate } | Self::Unmark { coordinate } => coordinate,
        }
    }
}
