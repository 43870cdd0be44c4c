//! Move ordering: promotions, then captures by victim value, then quiet moves.

use std::cmp::Reverse;

use chesslab_core::{Move, PieceKind, Position};

use crate::eval::material::piece_value;
use crate::eval::score::Score;

/// Base key for promotions; above every capture key.
const PROMOTION_BASE: Score = 10_000;

/// Base key for captures; above every quiet move.
const CAPTURE_BASE: Score = 1_000;

/// Ordering key for `mv` in `pos`. Higher keys are searched first.
///
/// | Move          | key                         |
/// |---------------|-----------------------------|
/// | Promotion     | 10,000 + promoted value     |
/// | Capture       | 1,000 + victim value        |
/// | En passant    | 1,000 + pawn value          |
/// | Quiet         | 0                           |
pub fn score_move<P: Position>(pos: &P, mv: Move) -> Score {
    if let Some(kind) = mv.promotion {
        return PROMOTION_BASE + piece_value(kind);
    }
    match pos.piece_at(mv.to) {
        Some(victim) => CAPTURE_BASE + piece_value(victim.kind),
        None if is_en_passant(pos, mv) => CAPTURE_BASE + piece_value(PieceKind::Pawn),
        None => 0,
    }
}

/// A pawn moving diagonally onto an empty square can only be capturing en passant.
fn is_en_passant<P: Position>(pos: &P, mv: Move) -> bool {
    mv.from.file() != mv.to.file()
        && pos
            .piece_at(mv.from)
            .is_some_and(|piece| piece.kind == PieceKind::Pawn)
}

/// Sort `moves` by descending [`score_move`] key.
///
/// The sort is stable, so equal keys keep their generation order.
pub fn order_moves<P: Position>(pos: &P, moves: Vec<Move>) -> Vec<Move> {
    let mut keyed: Vec<(Score, Move)> = moves.into_iter().map(|mv| (score_move(pos, mv), mv)).collect();
    keyed.sort_by_key(|&(key, _)| Reverse(key));
    keyed.into_iter().map(|(_, mv)| mv).collect()
}

/// Move `hint` to the front of `moves`, keeping the others in order.
///
/// No-op when `hint` is `None` or not in the list.
pub fn promote_hint(moves: &mut [Move], hint: Option<Move>) {
    let Some(hint) = hint else {
        return;
    };
    if let Some(idx) = moves.iter().position(|&mv| mv == hint) {
        moves[..=idx].rotate_right(1);
    }
}
