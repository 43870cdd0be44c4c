//! Search algorithms and move ordering.

pub mod alphabeta;
pub mod iterative;
pub mod minimax;
pub mod ordering;
pub mod terminal;

use chesslab_core::{Move, Position};
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::eval::score::Score;

use alphabeta::alphabeta_root;
use iterative::IterativeDeepening;

/// Depth `choose_minimax_move` callers conventionally use.
pub const DEFAULT_MINIMAX_DEPTH: u8 = 2;

/// Depth `choose_alphabeta_move` callers conventionally use.
pub const DEFAULT_ALPHABETA_DEPTH: u8 = 3;

/// Result of a completed fixed-depth search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move, or `None` when the root has no legal move.
    pub best_move: Option<Move>,
    /// Value of the best move from White's perspective (0 with no legal move).
    pub score: Score,
    /// Nodes visited below the root.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Counters for one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    pub nodes: u64,
}

/// Pick the minimax move at `depth`, returning it with the node count.
///
/// When `metrics` is given its node count is overwritten with this search's.
pub fn choose_minimax_move<P: Position>(
    pos: &P,
    depth: u8,
    metrics: Option<&mut SearchMetrics>,
) -> (Option<Move>, u64) {
    report(minimax::minimax(pos, depth), metrics)
}

/// Pick the alpha-beta move at `depth`, returning it with the node count.
///
/// Reports the same move as [`choose_minimax_move`] at the same depth.
pub fn choose_alphabeta_move<P: Position>(
    pos: &P,
    depth: u8,
    metrics: Option<&mut SearchMetrics>,
) -> (Option<Move>, u64) {
    report(alphabeta_root(pos, depth, None), metrics)
}

/// Anytime search: an iterator of ever-better moves for `pos`.
pub fn choose_move<P: Position>(pos: &P) -> IterativeDeepening<P> {
    IterativeDeepening::new(pos.clone())
}

/// A uniformly random legal move, or `None` if there is none.
pub fn choose_random_move<P: Position, R: Rng + ?Sized>(pos: &P, rng: &mut R) -> Option<Move> {
    pos.legal_moves().choose(rng).copied()
}

fn report(result: SearchResult, metrics: Option<&mut SearchMetrics>) -> (Option<Move>, u64) {
    if let Some(metrics) = metrics {
        metrics.nodes = result.nodes;
    }
    (result.best_move, result.nodes)
}

#[cfg(test)]
mod tests {
    use chesslab_core::{Board, Position};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::{SearchMetrics, choose_alphabeta_move, choose_minimax_move, choose_random_move};

    #[test]
    fn metrics_receive_node_count() {
        let board = Board::starting_position();
        let mut metrics = SearchMetrics { nodes: 12_345 };
        let (mv, nodes) = choose_minimax_move(&board, 1, Some(&mut metrics));
        assert!(mv.is_some());
        assert_eq!(nodes, 20);
        assert_eq!(metrics.nodes, 20, "metrics should be reset, not accumulated");
    }

    #[test]
    fn both_searches_agree_on_start_position() {
        let board = Board::starting_position();
        let (mm, _) = choose_minimax_move(&board, 2, None);
        let (ab, _) = choose_alphabeta_move(&board, 2, None);
        assert_eq!(mm, ab);
    }

    #[test]
    fn random_move_is_legal_and_reproducible() {
        let board = Board::starting_position();
        let legal = board.legal_moves();
        let first = choose_random_move(&board, &mut StdRng::seed_from_u64(7));
        let again = choose_random_move(&board, &mut StdRng::seed_from_u64(7));
        assert!(first.is_some_and(|mv| legal.contains(&mv)));
        assert_eq!(first, again);
    }

    #[test]
    fn random_move_none_without_legal_moves() {
        let board: Board = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(choose_random_move(&board, &mut StdRng::seed_from_u64(1)), None);
    }
}
