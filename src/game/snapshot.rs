#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, GameStatus, Piece, Square};

/// Read-only view of a session for the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Board grid indexed `[row][col]`, row 0 = rank 8
    pub squares: [[Option<(Color, Piece)>; 8]; 8],
    pub side_to_move: Color,
    pub selection: Option<Square>,
    /// Legal destinations of the selected piece, ascending
    pub destinations: Vec<Square>,
    /// King of the side to move, when it is in check
    pub checked_king: Option<Square>,
    pub status: GameStatus,
    pub pending_promotion: Option<Square>,
    pub game_over: bool,
}

impl Snapshot {
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        self.checked_king.is_some()
    }
}
