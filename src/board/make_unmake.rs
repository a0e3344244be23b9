use std::ops::Deref;

use log::debug;

use super::{Board, Color, MoveError, MoveRecord, Piece, PromotionError, Square};

/// What `make_raw` needs to put the board back.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnmakeInfo {
    from: Square,
    to: Square,
    moved: (Color, Piece),
    captured: Option<(Color, Piece)>,
}

/// A trial move applied to the board, reverted when dropped.
///
/// Reads go through `Deref<Target = Board>`. The revert runs on every exit
/// path, including unwinding out of the caller.
pub(crate) struct Simulation<'a> {
    board: &'a mut Board,
    info: UnmakeInfo,
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.unmake_raw(self.info);
    }
}

impl Board {
    /// Move the piece on `from` to `to`, capturing any occupant and moving
    /// the tracked king. No legality checks, no history, no turn switch.
    fn make_raw(&mut self, from: Square, to: Square, moved: (Color, Piece)) -> UnmakeInfo {
        let captured = self.piece_at(to);
        self.put(to, Some(moved));
        self.put(from, None);
        if moved.1 == Piece::King {
            self.king_squares[moved.0.index()] = to;
        }
        UnmakeInfo {
            from,
            to,
            moved,
            captured,
        }
    }

    fn unmake_raw(&mut self, info: UnmakeInfo) {
        self.put(info.from, Some(info.moved));
        self.put(info.to, info.captured);
        if info.moved.1 == Piece::King {
            self.king_squares[info.moved.0.index()] = info.from;
        }
    }

    /// Apply `from`-`to` with `moved` (the piece on `from`) for the lifetime
    /// of the returned guard.
    pub(crate) fn simulate(
        &mut self,
        from: Square,
        to: Square,
        moved: (Color, Piece),
    ) -> Simulation<'_> {
        let info = self.make_raw(from, to, moved);
        Simulation { board: self, info }
    }

    /// Commit a legal move for the side to move.
    ///
    /// A pawn reaching its promotion row leaves a pending promotion and the
    /// turn does not pass until `resolve_promotion` is called. On error the
    /// board is untouched.
    pub fn commit_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        if let Some(square) = self.pending_promotion {
            return Err(MoveError::PromotionPending { square });
        }
        let moved = self
            .piece_at(from)
            .ok_or(MoveError::EmptySquare { square: from })?;
        if moved.0 != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: from,
                side_to_move: self.side_to_move,
            });
        }
        if !self.legal_moves(from).contains(to) {
            return Err(MoveError::Unreachable { from, to });
        }

        let info = self.make_raw(from, to, moved);
        let record = MoveRecord {
            from,
            to,
            moved,
            captured: info.captured,
            side: moved.0,
            promotion: None,
        };
        self.history.push(record);
        self.legal_cache.clear();
        debug!("{} played {record}", record.side);

        if moved.1 == Piece::Pawn && to.row() == moved.0.promotion_row() {
            debug!("promotion pending on {to}");
            self.pending_promotion = Some(to);
        } else {
            self.side_to_move = self.side_to_move.opponent();
        }
        Ok(record)
    }

    /// Replace the pawn waiting on `square` with `kind` and pass the turn.
    pub fn resolve_promotion(&mut self, square: Square, kind: Piece) -> Result<(), PromotionError> {
        let expected = self.pending_promotion.ok_or(PromotionError::NotPending)?;
        if square != expected {
            return Err(PromotionError::WrongSquare {
                expected,
                found: square,
            });
        }
        if !kind.is_promotion_choice() {
            return Err(PromotionError::InvalidKind { piece: kind });
        }

        let color = self.side_to_move;
        self.put(square, Some((color, kind)));
        if let Some(last) = self.history.last_mut() {
            last.promotion = Some(kind);
        }
        self.pending_promotion = None;
        self.side_to_move = color.opponent();
        self.legal_cache.clear();
        debug!("{color} pawn on {square} promoted to {kind}");
        Ok(())
    }

    /// Take back the last committed move, including a pending or resolved
    /// promotion. Returns `None` and does nothing when the history is empty.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.unmake_raw(UnmakeInfo {
            from: record.from,
            to: record.to,
            moved: record.moved,
            captured: record.captured,
        });
        self.side_to_move = record.side;
        self.pending_promotion = None;
        self.legal_cache.clear();
        debug!("undid {record}");
        Some(record)
    }
}
