//! Chess board representation and rules.
//!
//! An 8x8 mailbox board with pseudo-legal and legal move generation, check,
//! checkmate and stalemate detection, deferred pawn promotion and undo.
//! Castling and en passant are not part of this rule set.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, GameStatus};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_move_count(Color::White), 20);
//!
//! board.commit_move("e2".parse().unwrap(), "e4".parse().unwrap()).unwrap();
//! assert_eq!(board.side_to_move(), Color::Black);
//! assert_eq!(board.status(), GameStatus::Ongoing);
//! ```

mod attack_tables;
mod builder;
mod error;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BuildError, MoveError, PromotionError, SquareError};
pub use state::Board;
pub use status::GameStatus;
pub use types::{Color, MoveRecord, Piece, Square, SquareSet, SquareSetIter, PROMOTION_PIECES};
