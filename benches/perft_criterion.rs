//! Perft throughput over reference positions.
//!
//! Every (position, depth) pair is first checked against its full counter
//! record, so a timing run doubles as a regression check on the counting
//! rules: move-type counters accumulate over every ply, and check and
//! checkmate counters include every visited node, the root too.
//!
//! `CHESS_CORE_BENCH_SUITE=standard cargo bench --bench perft_criterion`

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_core::game_state::chess_rules::STARTING_POSITION_FEN;
use chess_core::game_state::game_state::GameState;
use chess_core::move_generation::perft::{perft, PerftCounts};

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const POSITION_4_FEN: &str = "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1";

/// Totals for one perft walk; the remaining counters are not asserted.
#[derive(Clone, Copy)]
struct Expected {
    depth: u8,
    nodes: u64,
    captures: u64,
    checks: u64,
    checkmates: u64,
}

const fn at_depth(depth: u8, nodes: u64, captures: u64, checks: u64, checkmates: u64) -> Expected {
    Expected {
        depth,
        nodes,
        captures,
        checks,
        checkmates,
    }
}

struct Position {
    name: &'static str,
    fen: &'static str,
    quick: &'static [Expected],
    standard: &'static [Expected],
}

// Depths stop before any mate appears above the leaf ply, where a mated
// position is counted as a node of its own.
const POSITIONS: &[Position] = &[
    Position {
        name: "startpos",
        fen: STARTING_POSITION_FEN,
        quick: &[at_depth(1, 20, 0, 0, 0), at_depth(2, 400, 0, 0, 0), at_depth(3, 8902, 34, 12, 0)],
        standard: &[at_depth(4, 197_281, 1610, 481, 8)],
    },
    Position {
        name: "kiwipete",
        fen: KIWIPETE_FEN,
        quick: &[at_depth(1, 48, 8, 0, 0), at_depth(2, 2039, 359, 3, 0)],
        standard: &[at_depth(3, 97_862, 17_461, 996, 1)],
    },
    Position {
        name: "position_3",
        fen: POSITION_3_FEN,
        quick: &[at_depth(1, 14, 1, 2, 0), at_depth(2, 191, 15, 12, 0), at_depth(3, 2812, 224, 279, 0)],
        standard: &[at_depth(4, 43_238, 3572, 1959, 17)],
    },
    // The root side starts in check, which the check counter includes.
    Position {
        name: "position_4",
        fen: POSITION_4_FEN,
        quick: &[],
        standard: &[at_depth(1, 6, 0, 1, 0), at_depth(2, 264, 87, 11, 0), at_depth(3, 9467, 1108, 49, 22)],
    },
];

fn standard_suite() -> bool {
    matches!(
        std::env::var("CHESS_CORE_BENCH_SUITE"),
        Ok(value) if value.eq_ignore_ascii_case("standard")
    )
}

fn verify(name: &str, counts: &PerftCounts, expected: &Expected) {
    let got = (counts.nodes, counts.captures, counts.checks, counts.checkmates);
    let want = (expected.nodes, expected.captures, expected.checks, expected.checkmates);
    assert_eq!(
        got, want,
        "{name} depth {}: (nodes, captures, checks, checkmates) mismatch",
        expected.depth
    );
}

fn bench_perft(c: &mut Criterion) {
    let standard = standard_suite();
    let mut group = c.benchmark_group(if standard { "perft_standard" } else { "perft_quick" });
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for position in POSITIONS {
        let game = GameState::from_fen(position.fen).expect("benchmark FEN should parse");
        let extra: &[Expected] = if standard { position.standard } else { &[] };

        for expected in position.quick.iter().chain(extra) {
            verify(position.name, &perft(&game, expected.depth), expected);

            group.throughput(Throughput::Elements(expected.nodes));
            group.bench_with_input(
                BenchmarkId::new(position.name, expected.depth),
                expected,
                |b, expected| {
                    b.iter(|| black_box(perft(black_box(&game), expected.depth).nodes));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
