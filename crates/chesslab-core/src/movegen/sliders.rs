//! Sliding piece (bishop, rook, queen) move generation.

use crate::attacks::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Generate pseudo-legal moves for the slider of `kind` on `src`.
pub(super) fn gen_slider(board: &Board, src: Square, kind: PieceKind, list: &mut Vec<Move>) {
    let us = board.side_to_move();
    let dirs: &[(i8, i8)] = match kind {
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        _ => &QUEEN_DIRS,
    };

    for &(dr, df) in dirs {
        let mut cur = src;
        while let Some(dst) = cur.offset(dr, df) {
            match board.piece_on(dst) {
                None => list.push(Move::new(src, dst)),
                Some(piece) => {
                    if piece.color != us {
                        list.push(Move::new(src, dst));
                    }
                    break;
                }
            }
            cur = dst;
        }
    }
}
