//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal and legal move generation per piece
//! - `check.rs` - Check, checkmate and stalemate detection
//! - `make_unmake.rs` - Commit, promotion and undo correctness
//! - `perft.rs` - Move tree node counts
//! - `proptest.rs` - Property-based tests

mod perft;
mod proptest;

use crate::board::{Board, BoardBuilder, Color, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Build a position from the piece-placement field of a FEN string.
pub(super) fn position(placement: &str, side: Color) -> Board {
    BoardBuilder::from_placement(placement)
        .and_then(|builder| builder.side_to_move(side).build())
        .expect("valid test position")
}

/// Destinations as sorted algebraic names
pub(super) fn names(set: crate::board::SquareSet) -> Vec<String> {
    let mut v: Vec<String> = set.iter().map(|s| s.to_string()).collect();
    v.sort();
    v
}
