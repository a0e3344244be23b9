//! Error types for chess board operations.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for rejected move commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    EmptySquare { square: Square },
    /// The origin piece does not belong to the side to move
    WrongSide { square: Square, side_to_move: Color },
    /// The destination is not a legal move for the origin piece
    Unreachable { from: Square, to: Square },
    /// A pawn promotion must be resolved before the next move
    PromotionPending { square: Square },
    /// The game has already ended
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => {
                write!(f, "No piece on {square}")
            }
            MoveError::WrongSide {
                square,
                side_to_move,
            } => {
                write!(f, "Piece on {square} does not belong to {side_to_move}, the side to move")
            }
            MoveError::Unreachable { from, to } => {
                write!(f, "Illegal move {from}-{to}")
            }
            MoveError::PromotionPending { square } => {
                write!(f, "Promotion on {square} must be chosen first")
            }
            MoveError::GameOver => write!(f, "Game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for promotion choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromotionError {
    /// Pawns may only become a queen, rook, bishop or knight
    InvalidKind { piece: Piece },
    /// No pawn is waiting for a promotion choice
    NotPending,
    /// The promotion is pending on a different square
    WrongSquare { expected: Square, found: Square },
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::InvalidKind { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            PromotionError::NotPending => write!(f, "No promotion is pending"),
            PromotionError::WrongSquare { expected, found } => {
                write!(f, "Promotion is pending on {expected}, not {found}")
            }
        }
    }
}

impl std::error::Error for PromotionError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for positions rejected by `BoardBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    MissingKing { color: Color },
    DuplicateKing { color: Color, first: Square, second: Square },
    /// The side that just moved would still be in check
    OpponentInCheck { color: Color },
    InvalidPiece { char: char },
    InvalidRank { rank: usize },
    TooManyFiles { rank: usize, files: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::MissingKing { color } => {
                write!(f, "Position has no {color} king")
            }
            BuildError::DuplicateKing {
                color,
                first,
                second,
            } => {
                write!(f, "Position has two {color} kings ({first} and {second})")
            }
            BuildError::OpponentInCheck { color } => {
                write!(f, "The {color} king is in check but it is not {color}'s turn")
            }
            BuildError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in placement")
            }
            BuildError::InvalidRank { rank } => {
                write!(f, "Placement has too many ranks (rank index {rank})")
            }
            BuildError::TooManyFiles { rank, files } => {
                write!(f, "Placement rank {rank} has {files} files")
            }
        }
    }
}

impl std::error::Error for BuildError {}
