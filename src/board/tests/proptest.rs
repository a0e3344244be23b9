//! Property-based tests using proptest.

use crate::board::{Board, Color, GameStatus, Piece, Square, SquareSet, PROMOTION_PIECES};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `plies` random legal moves, resolving promotions with a random
/// kind. Stops early when the side to move has no legal move.
fn random_playout(board: &mut Board, rng: &mut StdRng, plies: usize) {
    for _ in 0..plies {
        let moves = board.all_legal_moves(board.side_to_move());
        let Some(&(from, targets)) = moves.choose(rng) else {
            return;
        };
        let Some(to) = targets.iter().choose(rng) else {
            return;
        };
        if board.commit_move(from, to).is_err() {
            return;
        }
        if board.pending_promotion().is_some() {
            let kind = *PROMOTION_PIECES.choose(rng).unwrap_or(&Piece::Queen);
            if board.resolve_promotion(to, kind).is_err() {
                return;
            }
        }
    }
}

proptest! {
    /// Property: no legal move leaves the mover's own king in check
    #[test]
    fn prop_legal_moves_never_expose_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let side = board.side_to_move();
        for (from, targets) in board.all_legal_moves(side) {
            for to in targets {
                board.commit_move(from, to).unwrap();
                prop_assert!(!board.in_check(side), "{}-{} exposes the king", from, to);
                board.undo_move();
            }
        }
    }

    /// Property: legal moves are a subset of pseudo moves and querying them
    /// does not change the board
    #[test]
    fn prop_legal_moves_pure_subset(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let before = board.clone();
        for from in Square::all() {
            let pseudo = board.pseudo_moves(from);
            let legal = board.legal_moves(from);
            prop_assert!(legal.iter().all(|to| pseudo.contains(to)));
            // Cached result matches
            prop_assert_eq!(board.legal_moves(from), legal);
        }
        prop_assert_eq!(&board, &before);
        prop_assert_eq!(board.grid(), before.grid());
    }

    /// Property: undoing every move restores the starting position
    #[test]
    fn prop_commit_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let start = board.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        while board.undo_move().is_some() {}
        prop_assert_eq!(board, start);
    }

    /// Property: each side always has exactly one king on its tracked square
    #[test]
    fn prop_king_square_tracked(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        for color in Color::BOTH {
            let kings: SquareSet = board
                .pieces_of(color)
                .filter(|&(_, piece)| piece == Piece::King)
                .map(|(sq, _)| sq)
                .collect();
            prop_assert_eq!(kings.len(), 1);
            prop_assert!(kings.contains(board.king_square(color)));
        }
    }

    /// Property: status agrees with check and mobility
    #[test]
    fn prop_status_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        random_playout(&mut board, &mut rng, num_moves);

        let side = board.side_to_move();
        let status = board.status();
        let in_check = board.in_check(side);
        let can_move = board.has_legal_moves(side);
        prop_assert_eq!(status.is_terminal(), !can_move);
        prop_assert_eq!(
            matches!(status, GameStatus::Check | GameStatus::Checkmate),
            in_check
        );
    }
}
