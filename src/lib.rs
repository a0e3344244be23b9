pub mod board;
pub mod game;

pub use board::{Board, Color, GameStatus, MoveRecord, Piece, Square};
pub use game::{Game, GameOptions, Snapshot};
