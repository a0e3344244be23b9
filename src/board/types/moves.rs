//! Move history records.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A committed move, as kept in the board's history.
///
/// `moved` is the piece as it stood on `from` (a promoting pawn is recorded
/// as a pawn); `promotion` is filled in once the promotion choice is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
    pub side: Color,
    pub promotion: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Piece standing on `to` after the move completed
    #[inline]
    #[must_use]
    pub fn placed_piece(&self) -> (Color, Piece) {
        match self.promotion {
            Some(kind) => (self.moved.0, kind),
            None => self.moved,
        }
    }
}

/// Coordinate notation: `N g1-f3`, `P e4xd5`, `P e7-e8=Q`.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{} {}{}{}",
            self.moved.1.to_char().to_ascii_uppercase(),
            self.from,
            separator,
            self.to
        )?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.to_char().to_ascii_uppercase())?;
        }
        Ok(())
    }
}
