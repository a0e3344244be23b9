use std::fmt;

use super::{Color, MoveRecord, Piece, Square, SquareSet};

pub(crate) const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Legal destinations per origin square, valid for one ply.
///
/// Filled lazily by `Board::legal_moves` and cleared by every commit,
/// promotion and undo.
#[derive(Clone, Debug)]
pub(crate) struct LegalMoveCache {
    entries: [Option<SquareSet>; 64],
}

impl LegalMoveCache {
    pub(crate) fn new() -> Self {
        LegalMoveCache {
            entries: [None; 64],
        }
    }

    pub(crate) fn get(&self, sq: Square) -> Option<SquareSet> {
        self.entries[sq.index()]
    }

    pub(crate) fn insert(&mut self, sq: Square, moves: SquareSet) {
        self.entries[sq.index()] = Some(moves);
    }

    pub(crate) fn clear(&mut self) {
        self.entries = [None; 64];
    }
}

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) king_squares: [Square; 2], // [white, black]
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) pending_promotion: Option<Square>,
    pub(crate) legal_cache: LegalMoveCache,
}

impl Board {
    /// Standard initial position, White to move
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_ROW.iter().enumerate() {
            for color in Color::BOTH {
                board.put(sq(color.back_row(), col), Some((color, *piece)));
                board.put(sq(color.pawn_start_row(), col), Some((color, Piece::Pawn)));
            }
        }
        board.king_squares = [
            sq(Color::White.back_row(), 4),
            sq(Color::Black.back_row(), 4),
        ];
        board
    }

    /// No pieces; callers must place both kings and set `king_squares`.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            side_to_move: Color::White,
            king_squares: [sq(7, 4), sq(0, 4)],
            history: Vec::new(),
            pending_promotion: None,
            legal_cache: LegalMoveCache::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Option<(Color, Piece)>) {
        self.squares[sq.index()] = piece;
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Tracked square of `color`'s king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Committed moves, oldest first
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Square of a pawn waiting for its promotion choice
    #[must_use]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    /// Squares occupied by `color`, in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some((c, piece)) if c == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// The board as a grid indexed `[row][col]`
    #[must_use]
    pub fn grid(&self) -> [[Option<(Color, Piece)>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for sq in Square::all() {
            grid[sq.row()][sq.col()] = self.piece_at(sq);
        }
        grid
    }

    /// Numbered history lines for display, e.g. `1. P e2-e4` / `1... P e7-e5`
    #[must_use]
    pub fn move_list(&self) -> Vec<String> {
        let mut number = 1;
        self.history
            .iter()
            .enumerate()
            .map(|(i, record)| {
                if record.side == Color::White && i > 0 {
                    number += 1;
                }
                match record.side {
                    Color::White => format!("{number}. {record}"),
                    Color::Black => format!("{number}... {record}"),
                }
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Positions compare equal when pieces, side to move, tracked kings, pending
/// promotion and history agree; the legal-move cache is ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.side_to_move == other.side_to_move
            && self.king_squares == other.king_squares
            && self.pending_promotion == other.pending_promotion
            && self.history == other.history
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = match self.piece_at(sq(row, col)) {
                    Some((color, piece)) => piece.to_colored_char(color),
                    None => ' ',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move", self.side_to_move)
    }
}

/// In-bounds square from loop indices.
#[inline]
pub(crate) fn sq(row: usize, col: usize) -> Square {
    debug_assert!(row < 8 && col < 8);
    Square::from_index(row * 8 + col)
}
