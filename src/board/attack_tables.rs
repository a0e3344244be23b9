use once_cell::sync::Lazy;

use super::state::sq;
use super::SquareSet;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn leaper_table(deltas: &[(isize, isize)]) -> [SquareSet; 64] {
    let mut table = [SquareSet::EMPTY; 64];
    for (idx, targets) in table.iter_mut().enumerate() {
        let from = sq(idx / 8, idx % 8);
        for &(dr, dc) in deltas {
            if let Some(to) = from.offset(dr, dc) {
                targets.insert(to);
            }
        }
    }
    table
}

/// Squares a knight reaches from each square on an empty board
pub(crate) static KNIGHT_TARGETS: Lazy<[SquareSet; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

/// Squares a king reaches from each square on an empty board
pub(crate) static KING_TARGETS: Lazy<[SquareSet; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));
