//! Fixed-depth alpha-beta with move ordering.

use chesslab_core::{Color, Move, Position};

use crate::eval::score::{INF, Score};
use crate::search::ordering::{order_moves, promote_hint};
use crate::search::terminal::{leaf_score, terminal_score};
use crate::search::{SearchMetrics, SearchResult};

/// Fail-soft alpha-beta value of `pos` within `(alpha, beta)`. White maximizes.
///
/// Inside the window the result is exact. A result at or below `alpha` is an
/// upper bound on the true value, one at or above `beta` a lower bound.
pub fn alphabeta<P: Position>(
    pos: &P,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    metrics: &mut SearchMetrics,
) -> Score {
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

    for mv in order_moves(pos, moves) {
        let mut child = pos.clone();
        child.make(mv);
        let value = alphabeta(&child, depth - 1, alpha, beta, metrics);

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Root alpha-beta: the best move at `depth` and its exact value.
///
/// Moves are searched in ordered sequence with `pv_hint` first. The reported
/// move is the one [`minimax`](crate::search::minimax::minimax) picks: among
/// equal values the earliest in legal-move order wins. A move that precedes
/// the current best in that order is searched with the window widened by one
/// point, so an exact tie is seen and resolved in its favour.
pub fn alphabeta_root<P: Position>(pos: &P, depth: u8, pv_hint: Option<Move>) -> SearchResult {
    let mut metrics = SearchMetrics::default();
    let maximizing = pos.turn() == Color::White;
    let child_depth = depth.saturating_sub(1);

    let legal = pos.legal_moves();
    let mut ordered = order_moves(pos, legal.clone());
    promote_hint(&mut ordered, pv_hint);

    // (value, enumeration index, move)
    let mut best: Option<(Score, usize, Move)> = None;

    for mv in ordered {
        let index = legal.iter().position(|&m| m == mv).unwrap_or(usize::MAX);
        let (alpha, beta) = match best {
            None => (-INF, INF),
            Some((value, best_index, _)) => {
                let slack = Score::from(index < best_index);
                if maximizing {
                    (value - slack, INF)
                } else {
                    (-INF, value + slack)
                }
            }
        };

        let mut child = pos.clone();
        child.make(mv);
        let value = alphabeta(&child, child_depth, alpha, beta, &mut metrics);

        let improves = match best {
            None => true,
            Some((best_value, best_index, _)) => {
                let strictly_better = if maximizing {
                    value > best_value
                } else {
                    value < best_value
                };
                strictly_better || (value == best_value && index < best_index)
            }
        };
        if improves {
            best = Some((value, index, mv));
        }
    }

    SearchResult {
        best_move: best.map(|(_, _, mv)| mv),
        score: best.map_or(0, |(value, _, _)| value),
        nodes: metrics.nodes,
        depth,
    }
}
