//! Perft node counts for move generation correctness.
//!
//! Castling and en passant are not part of this rule set, so only positions
//! and depths where neither can occur are listed.

use super::position;
use crate::board::{Board, Color};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    placement: &'static str,
    side: Color,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side: Color::White,
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Position 3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side: Color::White,
        depths: &[(1, 14), (2, 191)],
    },
    TestPosition {
        name: "Position 4",
        placement: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        side: Color::White,
        depths: &[(1, 6)],
    },
    TestPosition {
        name: "Promotion",
        placement: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N",
        side: Color::Black,
        depths: &[(1, 24), (2, 496), (3, 9483)],
    },
];

#[test]
fn test_perft_positions() {
    for pos in TEST_POSITIONS {
        let mut board = position(pos.placement, pos.side);
        for &(depth, expected) in pos.depths {
            let start = Instant::now();
            let nodes = board.perft(depth);
            let elapsed = start.elapsed();
            assert_eq!(
                nodes, expected,
                "{} depth {}: expected {}, got {} ({:?})",
                pos.name, depth, expected, nodes, elapsed
            );
        }
    }
}

#[test]
fn test_perft_depth_zero_counts_root() {
    let mut board = Board::new();
    assert_eq!(board.perft(0), 1);
}

#[test]
fn test_perft_leaves_board_unchanged() {
    let mut board = position("n1n5/PPPk4/8/8/8/8/4Kppp/5N1N", Color::Black);
    let before = board.clone();
    board.perft(2);
    assert_eq!(board, before);
    assert!(board.history().is_empty());
    assert_eq!(board.pending_promotion(), None);
}

#[test]
fn test_perft_from_mated_position_is_zero() {
    let mut board = Board::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        board
            .commit_move(from.parse().unwrap(), to.parse().unwrap())
            .unwrap();
    }
    assert_eq!(board.perft(1), 0);
}
