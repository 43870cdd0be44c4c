//! Full-width fixed-depth minimax.

use chesslab_core::{Color, Move, Position};

use crate::eval::score::{INF, Score};
use crate::search::terminal::{leaf_score, terminal_score};
use crate::search::{SearchMetrics, SearchResult};

/// Minimax value of `pos` searched `depth` plies deep. White maximizes.
///
/// Every call counts one node in `metrics`.
pub fn minimax_value<P: Position>(pos: &P, depth: u8, metrics: &mut SearchMetrics) -> Score {
    metrics.nodes += 1;

    if depth == 0 {
        return leaf_score(pos);
    }

    let moves = pos.legal_moves();
    if moves.is_empty() {
        return terminal_score(pos);
    }

    let maximizing = pos.turn() == Color::White;
    let mut best = if maximizing { -INF } else { INF };
    for mv in moves {
        let mut child = pos.clone();
        child.make(mv);
        let value = minimax_value(&child, depth - 1, metrics);
        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    best
}

/// Root minimax: the best move at `depth` and its value.
///
/// The root always expands one ply, so depth 0 scores each child statically.
/// Ties go to the earliest move in legal-move order.
pub fn minimax<P: Position>(pos: &P, depth: u8) -> SearchResult {
    let mut metrics = SearchMetrics::default();
    let maximizing = pos.turn() == Color::White;
    let child_depth = depth.saturating_sub(1);

    let mut best: Option<(Move, Score)> = None;
    for mv in pos.legal_moves() {
        let mut child = pos.clone();
        child.make(mv);
        let value = minimax_value(&child, child_depth, &mut metrics);

        let improves = match best {
            None => true,
            Some((_, best_value)) if maximizing => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    SearchResult {
        best_move: best.map(|(mv, _)| mv),
        score: best.map_or(0, |(_, value)| value),
        nodes: metrics.nodes,
        depth,
    }
}
