//! Core chess types.
//!
//! This module contains the fundamental types used by the rule engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - bounds-checked (row, col) board square
//! - `SquareSet` - 64-bit set of squares returned by move generation
//! - `MoveRecord` - committed move kept in the history

mod moves;
mod piece;
mod square;
mod square_set;

pub use moves::MoveRecord;
pub use piece::{Color, Piece, PROMOTION_PIECES};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
