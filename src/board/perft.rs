use super::{Board, Piece, Square};

const PROMOTION_CHOICES: [Option<Piece>; 4] = [
    Some(Piece::Queen),
    Some(Piece::Rook),
    Some(Piece::Bishop),
    Some(Piece::Knight),
];

impl Board {
    fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        matches!(self.piece_at(from), Some((color, Piece::Pawn)) if to.row() == color.promotion_row())
    }

    /// Count leaf nodes of the legal move tree to `depth`, expanding each
    /// promotion into its four choices.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut nodes = 0;
        for (from, targets) in self.all_legal_moves(self.side_to_move) {
            for to in targets {
                let choices: &[Option<Piece>] = if self.is_promotion_move(from, to) {
                    &PROMOTION_CHOICES
                } else {
                    &[None]
                };

                for &choice in choices {
                    if self.commit_move(from, to).is_err() {
                        continue;
                    }
                    if let Some(kind) = choice {
                        if self.resolve_promotion(to, kind).is_err() {
                            self.undo_move();
                            continue;
                        }
                    }
                    nodes += self.perft(depth - 1);
                    self.undo_move();
                }
            }
        }
        nodes
    }
}
