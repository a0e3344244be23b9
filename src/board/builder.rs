//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece, for puzzles and tests.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.king_square(Color::Black).to_string(), "e8");
//! ```

use super::state::{sq, BACK_ROW};
use super::{Board, BuildError, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (col, &piece) in BACK_ROW.iter().enumerate() {
            for color in Color::BOTH {
                builder.pieces.push((sq(color.back_row(), col), color, piece));
                builder
                    .pieces
                    .push((sq(color.pawn_start_row(), col), color, Piece::Pawn));
            }
        }
        builder
    }

    /// Create a builder from the piece-placement field of a FEN string
    /// (`rnbqkbnr/pppppppp/8/...`), rank 8 first. White to move.
    pub fn from_placement(placement: &str) -> Result<Self, BuildError> {
        let mut builder = Self::new();
        for (row, rank) in placement.split('/').enumerate() {
            if row >= 8 {
                return Err(BuildError::InvalidRank { rank: row });
            }
            let mut col = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(BuildError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square::new(row, col).ok_or(BuildError::TooManyFiles {
                    rank: row,
                    files: col + 1,
                })?;
                builder.pieces.push((square, color, piece));
                col += 1;
            }
            if col > 8 {
                return Err(BuildError::TooManyFiles {
                    rank: row,
                    files: col,
                });
            }
        }
        Ok(builder)
    }

    /// Place a piece on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        // Remove any existing piece on this square
        self.pieces.retain(|(s, _, _)| *s != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(s, _, _)| *s != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    ///
    /// Fails unless each color has exactly one king and the side not to
    /// move is out of check; otherwise its king could be captured.
    pub fn build(self) -> Result<Board, BuildError> {
        let mut board = Board::empty();
        let mut kings: [Option<Square>; 2] = [None, None];

        for (square, color, piece) in self.pieces {
            if piece == Piece::King {
                if let Some(first) = kings[color.index()] {
                    return Err(BuildError::DuplicateKing {
                        color,
                        first,
                        second: square,
                    });
                }
                kings[color.index()] = Some(square);
            }
            board.put(square, Some((color, piece)));
        }

        for color in Color::BOTH {
            board.king_squares[color.index()] =
                kings[color.index()].ok_or(BuildError::MissingKing { color })?;
        }
        board.side_to_move = self.side_to_move;

        let waiting = self.side_to_move.opponent();
        if board.in_check(waiting) {
            return Err(BuildError::OpponentInCheck { color: waiting });
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build().unwrap();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_two_kings_only() {
        let board = BoardBuilder::new()
            .piece(at("e1"), Color::White, Piece::King)
            .piece(at("e8"), Color::Black, Piece::King)
            .build()
            .unwrap();

        assert!(board.piece_at(at("e1")).is_some());
        assert!(board.piece_at(at("e8")).is_some());
        assert!(board.piece_at(at("a1")).is_none());
        assert_eq!(board.king_square(Color::White), at("e1"));
    }

    #[test]
    fn test_side_to_move() {
        let board = BoardBuilder::new()
            .piece(at("e1"), Color::White, Piece::King)
            .piece(at("e8"), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build()
            .unwrap();

        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(at("a1"))
            .build()
            .unwrap();

        assert!(board.piece_at(at("a1")).is_none());
        assert!(board.piece_at(at("b1")).is_some());
    }

    #[test]
    fn test_missing_king_rejected() {
        let err = BoardBuilder::new()
            .piece(at("e1"), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert_eq!(err, BuildError::MissingKing { color: Color::Black });
    }

    #[test]
    fn test_duplicate_king_rejected() {
        let err = BoardBuilder::starting_position()
            .piece(at("d4"), Color::White, Piece::King)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateKing {
                color: Color::White,
                ..
            }
        ));
    }

    #[test]
    fn test_opponent_in_check_rejected() {
        let builder = BoardBuilder::new()
            .piece(at("e1"), Color::White, Piece::King)
            .piece(at("e8"), Color::Black, Piece::King)
            .piece(at("e4"), Color::White, Piece::Rook);

        // White to move could take the black king
        assert_eq!(
            builder.clone().build().unwrap_err(),
            BuildError::OpponentInCheck {
                color: Color::Black
            }
        );

        // Black to move is an ordinary check
        let mut board = builder.side_to_move(Color::Black).build().unwrap();
        assert!(board.in_check(Color::Black));
        assert!(!board.legal_moves(at("e8")).is_empty());
    }

    #[test]
    fn test_from_placement() {
        let board = BoardBuilder::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(board, Board::new());

        let board = BoardBuilder::from_placement("4k3/8/8/8/8/8/8/R3K3")
            .unwrap()
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        assert_eq!(board.piece_at(at("a1")), Some((Color::White, Piece::Rook)));
        assert_eq!(board.king_square(Color::Black), at("e8"));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn test_from_placement_rejects_bad_input() {
        assert_eq!(
            BoardBuilder::from_placement("4x3/8/8/8/8/8/8/4K3").unwrap_err(),
            BuildError::InvalidPiece { char: 'x' }
        );
        assert_eq!(
            BoardBuilder::from_placement("8/8/8/8/8/8/8/8/8").unwrap_err(),
            BuildError::InvalidRank { rank: 8 }
        );
        assert_eq!(
            BoardBuilder::from_placement("8k/8/8/8/8/8/8/4K3").unwrap_err(),
            BuildError::TooManyFiles { rank: 0, files: 9 }
        );
        assert_eq!(
            BoardBuilder::from_placement("44k/8/8/8/8/8/8/4K3").unwrap_err(),
            BuildError::TooManyFiles { rank: 0, files: 9 }
        );
    }

    #[test]
    fn test_replacing_a_king_keeps_one() {
        let board = BoardBuilder::new()
            .piece(at("e1"), Color::White, Piece::King)
            .piece(at("a8"), Color::Black, Piece::King)
            .piece(at("e1"), Color::White, Piece::Rook)
            .piece(at("g1"), Color::White, Piece::King)
            .build()
            .unwrap();
        assert_eq!(board.king_square(Color::White), at("g1"));
    }
}
