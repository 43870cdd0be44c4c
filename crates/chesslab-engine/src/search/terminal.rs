//! Classification of positions with no legal move.

use chesslab_core::{Color, Position};

use crate::eval::score::{MATE_SCORE, Score};

/// Score of a position in which the side to move has no legal move.
///
/// Checkmate scores `MATE_SCORE` against the side to move; stalemate scores 0.
pub fn terminal_score<P: Position>(pos: &P) -> Score {
    let side = pos.turn();
    if !pos.is_check(side) {
        return 0;
    }
    match side {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// Whether the side to move has at least one legal move.
///
/// Stops at the first pseudo-legal move that passes [`Position::is_legal_move`].
pub fn has_any_legal_move<P: Position>(pos: &P) -> bool {
    pos.generate_pseudo_legal()
        .into_iter()
        .any(|mv| pos.is_legal_move(mv))
}

/// Leaf value: the static evaluation, or the terminal score when no move exists.
pub(crate) fn leaf_score<P: Position>(pos: &P) -> Score {
    if has_any_legal_move(pos) {
        crate::eval::evaluate(pos)
    } else {
        terminal_score(pos)
    }
}
