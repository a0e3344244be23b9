//! Benchmarks for move generation and rule evaluation.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use chess_rules::board::{Board, Color};

/// Italian Game after 3...Nf6
fn middlegame() -> Board {
    let mut board = Board::new();
    for (from, to) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("g1", "f3"),
        ("b8", "c6"),
        ("f1", "c4"),
        ("g8", "f6"),
    ] {
        board
            .commit_move(from.parse().unwrap(), to.parse().unwrap())
            .unwrap();
    }
    board
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(black_box(depth)))
        });
    }

    let mut middle = middlegame();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middle.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    // Fresh clones so the per-position legal-move cache starts empty
    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter_batched(
            || startpos.clone(),
            |mut board| black_box(board.all_legal_moves(Color::White)),
            BatchSize::SmallInput,
        )
    });

    let middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter_batched(
            || middle.clone(),
            |mut board| black_box(board.all_legal_moves(Color::White)),
            BatchSize::SmallInput,
        )
    });

    let startpos = Board::new();
    group.bench_function("pseudo_startpos", |b| {
        b.iter(|| {
            startpos
                .pieces_of(Color::White)
                .map(|(sq, _)| black_box(startpos.pseudo_moves(sq)).len())
                .sum::<usize>()
        })
    });

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let middle = middlegame();
    group.bench_function("in_check", |b| {
        b.iter(|| black_box(middle.in_check(black_box(Color::White))))
    });
    group.bench_function("evaluate_terminal", |b| {
        b.iter_batched(
            || middle.clone(),
            |mut board| black_box(board.evaluate_terminal(Color::White)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_status);
criterion_main!(benches);
