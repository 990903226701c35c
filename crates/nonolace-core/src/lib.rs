//! Core data structures for nonogram (picture-logic) applications.
//!
//! This crate provides the fundamental, value-oriented data structures shared by
//! the solving and game-session components. Everything here is immutable-by-use:
//! operations return new values instead of mutating in place.
//!
//! # Overview
//!
//! 1. **Grid primitives**
//!    - [`position`]: the (x, y) coordinate type and its scan order
//!    - [`grid`]: a generic, dynamically sized 2D grid with line extraction,
//!      transposition, zipping, and position-based traversal
//! 2. **Cell semantics**
//!    - [`cell`]: the tri-state [`CellStatus`] used by attempt grids
//! 3. **Puzzle model**
//!    - [`puzzle`]: the immutable [`Puzzle`] (solution image plus run-length
//!      hints derived per column and per row) and its completion check
//!
//! # Examples
//!
//! ```
//! use nonolace_core::{Grid, Position, Puzzle};
//!
//! let image = Grid::parse_image(
//!     "
//!     ###
//!     #.
//!     ",
//! )?;
//! let puzzle = Puzzle::from_image(image);
//!
//! assert_eq!(puzzle.column_hints()[0].as_slice(), &[2]);
//! assert_eq!(puzzle.row_hints()[1].as_slice(), &[1]);
//! assert!(puzzle.image()[Position::new(0, 0)]);
//! # Ok::<(), nonolace_core::ParseGridError>(())
//! ```

pub mod cell;
pub mod grid;
pub mod position;
pub mod puzzle;

pub use self::{
    cell::CellStatus,
    grid::{Grid, ParseGridError},
    position::Position,
    puzzle::{LineHints, Puzzle},
};
