//! Game session for a UI shell.
//!
//! Wraps a [`Board`](crate::board::Board) with the state an input dispatcher
//! needs between clicks: the selected square, its legal destinations, the
//! last evaluated status and session options.
//!
//! # Example
//! ```
//! use chess_rules::game::{Game, GameOptions};
//! use chess_rules::board::GameStatus;
//!
//! let mut game = Game::new(GameOptions::default());
//! game.select_square("e2".parse().unwrap());
//! assert_eq!(game.snapshot().destinations.len(), 2);
//! let status = game.select_square("e4".parse().unwrap());
//! assert_eq!(status, GameStatus::Ongoing);
//! assert_eq!(game.move_list(), vec!["1. P e2-e4"]);
//! ```

mod options;
mod session;
mod snapshot;


pub use options::GameOptions;
pub use session::Game;
pub use snapshot::Snapshot;
