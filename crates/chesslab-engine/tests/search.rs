//! Integration tests for the search core.
//!
//! Cross-checks minimax against alpha-beta on a spread of positions and
//! covers the caller-facing entry points end to end.

use chesslab_core::{Board, Color, Move, Position, STARTING_FEN, Square};
use chesslab_engine::{
    DEFAULT_ALPHABETA_DEPTH, DEFAULT_MINIMAX_DEPTH, INF, MATE_SCORE, SearchMetrics, choose_alphabeta_move,
    choose_minimax_move, choose_move, evaluate,
};
use chesslab_engine::search::alphabeta::{alphabeta, alphabeta_root};
use chesslab_engine::search::minimax::{minimax, minimax_value};
use chesslab_engine::search::terminal::terminal_score;

const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

const ENDGAME_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

const SICILIAN_FEN: &str = "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2";

const PROMOTION_FEN: &str = "4k3/1P6/8/8/8/8/6p1/4K3 w - - 0 1";

const FOOLS_MATE_FEN: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

const HANGING_QUEEN_FEN: &str = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1";

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

// ── Minimax / alpha-beta equivalence ─────────────────────────────────────────

#[test]
fn alphabeta_reports_minimax_move_and_score() {
    for fen in [STARTING_FEN, KIWIPETE_FEN, ENDGAME_FEN, SICILIAN_FEN, PROMOTION_FEN] {
        let pos = board(fen);
        for depth in 1..=2 {
            let mm = minimax(&pos, depth);
            let ab = alphabeta_root(&pos, depth, None);
            assert_eq!(ab.best_move, mm.best_move, "{fen} depth {depth}: move differs");
            assert_eq!(ab.score, mm.score, "{fen} depth {depth}: score differs");
            assert!(
                ab.nodes <= mm.nodes,
                "{fen} depth {depth}: alpha-beta visited {} nodes, minimax {}",
                ab.nodes,
                mm.nodes
            );
        }
    }
}

#[test]
fn alphabeta_matches_minimax_at_depth_three() {
    for fen in [ENDGAME_FEN, PROMOTION_FEN] {
        let pos = board(fen);
        let (mm_move, mm_nodes) = choose_minimax_move(&pos, 3, None);
        let (ab_move, ab_nodes) = choose_alphabeta_move(&pos, 3, None);
        assert_eq!(ab_move, mm_move, "{fen}");
        assert!(ab_nodes <= mm_nodes);
    }
}

#[test]
fn node_counts_grow_with_depth_for_both_searches() {
    for fen in [STARTING_FEN, KIWIPETE_FEN, ENDGAME_FEN] {
        let pos = board(fen);
        let mm: Vec<u64> = (1..=DEFAULT_MINIMAX_DEPTH)
            .map(|depth| choose_minimax_move(&pos, depth, None).1)
            .collect();
        let ab: Vec<u64> = (1..=DEFAULT_ALPHABETA_DEPTH)
            .map(|depth| choose_alphabeta_move(&pos, depth, None).1)
            .collect();
        assert!(mm.windows(2).all(|w| w[0] <= w[1]), "{fen}: minimax {mm:?}");
        assert!(ab.windows(2).all(|w| w[0] <= w[1]), "{fen}: alpha-beta {ab:?}");
    }
}

#[test]
fn depth_zero_values_agree_with_evaluation() {
    for fen in [STARTING_FEN, KIWIPETE_FEN, ENDGAME_FEN] {
        let pos = board(fen);
        let mut metrics = SearchMetrics::default();
        assert_eq!(minimax_value(&pos, 0, &mut metrics), evaluate(&pos));
        assert_eq!(alphabeta(&pos, 0, -INF, INF, &mut metrics), evaluate(&pos));
    }
}

// ── Start position ───────────────────────────────────────────────────────────

#[test]
fn start_position_depth_one() {
    let pos = Board::starting_position();
    assert_eq!(evaluate(&pos), 0);

    let mut metrics = SearchMetrics::default();
    let (mm_move, nodes) = choose_minimax_move(&pos, 1, Some(&mut metrics));
    assert_eq!(nodes, 20);
    assert_eq!(metrics.nodes, 20);

    let mm = minimax(&pos, 1);
    let ab = alphabeta_root(&pos, 1, None);
    assert_eq!(mm.best_move, mm_move);
    assert_eq!(ab.best_move, mm.best_move);
    assert_eq!(ab.score, mm.score);
}

// ── Terminal positions ───────────────────────────────────────────────────────

#[test]
fn checkmated_white_has_no_move() {
    let pos = board(FOOLS_MATE_FEN);
    assert!(pos.is_check(Color::White));
    assert_eq!(terminal_score(&pos), -MATE_SCORE);

    let mut metrics = SearchMetrics { nodes: 99 };
    assert_eq!(choose_alphabeta_move(&pos, 3, Some(&mut metrics)), (None, 0));
    assert_eq!(metrics.nodes, 0);
    assert_eq!(choose_minimax_move(&pos, 2, None), (None, 0));
}

#[test]
fn stalemate_scores_zero_at_every_depth() {
    let pos = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert_eq!(terminal_score(&pos), 0);
    let mut metrics = SearchMetrics::default();
    for depth in 0..=3 {
        assert_eq!(minimax_value(&pos, depth, &mut metrics), 0);
    }
}

#[test]
fn black_finds_mate_in_one() {
    // 1.f3 e5 2.g4: Qh4 mates.
    let pos = board("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq g3 0 2");
    let result = alphabeta_root(&pos, 1, None);
    assert_eq!(result.best_move, Some(Move::new(Square::D8, Square::H4)));
    assert_eq!(result.score, -MATE_SCORE);
}

// ── Tactics ──────────────────────────────────────────────────────────────────

#[test]
fn takes_unprotected_queen() {
    let pos = board(HANGING_QUEEN_FEN);
    for depth in 1..=3 {
        let (mv, _) = choose_alphabeta_move(&pos, depth, None);
        assert_eq!(
            mv,
            Some(Move::new(Square::D1, Square::D5)),
            "depth {depth} should capture the queen"
        );
    }
}

// ── Symmetry ─────────────────────────────────────────────────────────────────

#[test]
fn mirrored_search_negates_score() {
    for fen in [KIWIPETE_FEN, ENDGAME_FEN, SICILIAN_FEN] {
        let pos = board(fen);
        let mirror = pos.mirrored();
        assert_eq!(evaluate(&pos), -evaluate(&mirror), "{fen}");
        let mut a = SearchMetrics::default();
        let mut b = SearchMetrics::default();
        assert_eq!(
            minimax_value(&pos, 2, &mut a),
            -minimax_value(&mirror, 2, &mut b),
            "{fen}"
        );
        assert_eq!(a.nodes, b.nodes);
    }
}

// ── Anytime driver ───────────────────────────────────────────────────────────

#[test]
fn anytime_driver_improves_to_the_capture() {
    let pos = board(HANGING_QUEEN_FEN);
    let moves: Vec<Move> = choose_move(&pos).take(3).collect();
    assert_eq!(moves.len(), 3);
    assert!(moves.iter().all(|&mv| mv == Move::new(Square::D1, Square::D5)));
}

#[test]
fn anytime_driver_first_move_is_legal_everywhere() {
    for fen in [STARTING_FEN, KIWIPETE_FEN, ENDGAME_FEN, SICILIAN_FEN, PROMOTION_FEN] {
        let pos = board(fen);
        let first = choose_move(&pos).next().unwrap();
        assert!(pos.legal_moves().contains(&first), "{fen}: {first} is not legal");
    }
}
