use log::trace;

use super::attack_tables::{
    BISHOP_DIRECTIONS, KING_TARGETS, KNIGHT_TARGETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::{Board, Color, Piece, Square, SquareSet};

impl Board {
    /// Destinations reachable by the piece on `from` under its movement and
    /// capture rules, without checking whether the mover's king is left in
    /// check. Empty for an empty square.
    #[must_use]
    pub fn pseudo_moves(&self, from: Square) -> SquareSet {
        let Some((color, piece)) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color),
            Piece::Knight => self.generate_leaper_moves(color, KNIGHT_TARGETS[from.index()]),
            Piece::Bishop => self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS),
            Piece::Rook => self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS),
            Piece::Queen => self.generate_sliding_moves(from, color, &QUEEN_DIRECTIONS),
            Piece::King => self.generate_leaper_moves(color, KING_TARGETS[from.index()]),
        }
    }

    fn generate_pawn_moves(&self, from: Square, color: Color) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.insert(forward);
                if from.row() == color.pawn_start_row() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if self.is_empty(double) {
                            moves.insert(double);
                        }
                    }
                }
            }
        }

        for d_col in [-1, 1] {
            if let Some(target) = from.offset(dir, d_col) {
                if matches!(self.piece_at(target), Some((c, _)) if c != color) {
                    moves.insert(target);
                }
            }
        }

        moves
    }

    fn generate_leaper_moves(&self, color: Color, targets: SquareSet) -> SquareSet {
        targets
            .iter()
            .filter(|&to| !matches!(self.piece_at(to), Some((c, _)) if c == color))
            .collect()
    }

    fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> SquareSet {
        let mut moves = SquareSet::EMPTY;
        for &(dr, dc) in directions {
            let mut cursor = from.offset(dr, dc);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.insert(to),
                    Some((c, _)) => {
                        if c != color {
                            moves.insert(to);
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, dc);
            }
        }
        moves
    }

    /// True if `sq` is among the pseudo-legal destinations of any piece of
    /// `attacker`.
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.pieces_of(attacker)
            .any(|(from, _)| self.pseudo_moves(from).contains(sq))
    }

    /// True if `color`'s tracked king is attacked by an opposing piece.
    ///
    /// Built on `pseudo_moves` only, so it never recurses into legality.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// `pseudo_moves(from)` minus the destinations that would leave the
    /// mover's own king in check. The board is unchanged afterwards.
    pub fn legal_moves(&mut self, from: Square) -> SquareSet {
        if let Some(cached) = self.legal_cache.get(from) {
            return cached;
        }
        let Some(moved) = self.piece_at(from) else {
            return SquareSet::EMPTY;
        };
        let color = moved.0;

        let mut legal = SquareSet::EMPTY;
        for to in self.pseudo_moves(from) {
            let exposes_king = self.simulate(from, to, moved).in_check(color);
            if exposes_king {
                trace!("{from}-{to} rejected: leaves {color} king in check");
            } else {
                legal.insert(to);
            }
        }

        self.legal_cache.insert(from, legal);
        legal
    }

    /// Every piece of `color` with at least one legal move, and its
    /// destinations, in row-major order of the origin square.
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<(Square, SquareSet)> {
        let origins: Vec<Square> = self.pieces_of(color).map(|(sq, _)| sq).collect();
        origins
            .into_iter()
            .map(|from| (from, self.legal_moves(from)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect()
    }

    /// True if any piece of `color` has a legal move.
    pub fn has_legal_moves(&mut self, color: Color) -> bool {
        let origins: Vec<Square> = self.pieces_of(color).map(|(sq, _)| sq).collect();
        origins
            .into_iter()
            .any(|from| !self.legal_moves(from).is_empty())
    }

    /// Number of legal moves for `color`
    pub fn legal_move_count(&mut self, color: Color) -> usize {
        self.all_legal_moves(color)
            .iter()
            .map(|(_, moves)| moves.len())
            .sum()
    }
}
