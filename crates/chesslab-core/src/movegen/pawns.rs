//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pseudo-legal pawn moves from `src`: pushes, captures, promotions and en passant.
pub(super) fn gen_pawn(board: &Board, src: Square, list: &mut Vec<Move>) {
    let us = board.side_to_move();
    let fwd = us.forward();

    // --- Pushes ---
    if let Some(one) = src.offset(fwd, 0)
        && board.piece_on(one).is_none()
    {
        push_pawn_move(src, one, us.promotion_rank(), list);

        if src.rank() == us.pawn_rank()
            && let Some(two) = one.offset(fwd, 0)
            && board.piece_on(two).is_none()
        {
            list.push(Move::new(src, two));
        }
    }

    // --- Captures ---
    for df in [-1, 1] {
        let Some(dst) = src.offset(fwd, df) else {
            continue;
        };
        match board.piece_on(dst) {
            Some(piece) if piece.color != us => {
                push_pawn_move(src, dst, us.promotion_rank(), list);
            }
            None if board.en_passant() == Some(dst) => list.push(Move::new(src, dst)),
            _ => {}
        }
    }
}

/// Push `src -> dst`, expanding into the four promotions when `dst` is on the last rank.
fn push_pawn_move(src: Square, dst: Square, promo_rank: u8, list: &mut Vec<Move>) {
    if dst.rank() == promo_rank {
        for kind in PieceKind::PROMOTIONS {
            list.push(Move::new_promotion(src, dst, kind));
        }
    } else {
        list.push(Move::new(src, dst));
    }
}
