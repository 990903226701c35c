//! Attempt management for nonogram puzzles.
//!
//! This crate owns the mutable side of a puzzle game: the [`Attempt`] (mark
//! grid, incorrect-mark history, remaining time) and the action log through
//! which every change flows ([`apply_attempt_action`]). Marking a cell the
//! picture does not contain is not an error: it costs a time penalty and is
//! recorded, like any wrong guess a player makes.
//!
//! [`SolveSession`] couples an attempt with the solving engine from
//! `nonolace-solver`, applying each solver step through the same action log a
//! player's input would use.
//!
//! # Examples
//!
//! ```
//! use nonolace_core::{Grid, Puzzle};
//! use nonolace_game::SolveSession;
//!
//! let puzzle = Puzzle::from_image(Grid::parse_image(
//!     "
//!     ###.
//!     .#.
//!     .##
//!     ",
//! )?);
//! let mut session = SolveSession::new(&puzzle);
//! let outcome = session.run(&puzzle)?;
//!
//! assert!(outcome.is_completed());
//! assert!(puzzle.is_complete(session.attempt().marks()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    actions::{apply_attempt_action, apply_attempt_actions},
    attempt::{Attempt, INITIAL_TIME_BUDGET, IncorrectMark},
    error::{GameError, SessionError},
    session::{SessionOutcome, SolveSession},
};

mod actions;
mod attempt;
mod error;
mod session;
