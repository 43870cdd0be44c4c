//! King move and castling generation.

use crate::attacks::KING_STEPS;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Squares involved in one castling move.
struct CastlePath {
    king_from: Square,
    king_to: Square,
    /// Square the king passes over; must not be attacked.
    transit: Square,
    rook_from: Square,
    /// Squares between king and rook that must be empty.
    empty: &'static [Square],
}

const fn castle_path(color: Color, side: CastleSide) -> CastlePath {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => CastlePath {
            king_from: Square::E1,
            king_to: Square::G1,
            transit: Square::F1,
            rook_from: Square::H1,
            empty: &[Square::F1, Square::G1],
        },
        (Color::White, CastleSide::QueenSide) => CastlePath {
            king_from: Square::E1,
            king_to: Square::C1,
            transit: Square::D1,
            rook_from: Square::A1,
            empty: &[Square::B1, Square::C1, Square::D1],
        },
        (Color::Black, CastleSide::KingSide) => CastlePath {
            king_from: Square::E8,
            king_to: Square::G8,
            transit: Square::F8,
            rook_from: Square::H8,
            empty: &[Square::F8, Square::G8],
        },
        (Color::Black, CastleSide::QueenSide) => CastlePath {
            king_from: Square::E8,
            king_to: Square::C8,
            transit: Square::D8,
            rook_from: Square::A8,
            empty: &[Square::B8, Square::C8, Square::D8],
        },
    }
}

/// Home square of the rook that castles with a king landing on `king_to`, and
/// the square it lands on. `None` if `king_to` is not a castling destination.
pub(crate) fn castle_rook_squares(king_to: Square) -> Option<(Square, Square)> {
    match king_to {
        Square::G1 => Some((Square::H1, Square::F1)),
        Square::C1 => Some((Square::A1, Square::D1)),
        Square::G8 => Some((Square::H8, Square::F8)),
        Square::C8 => Some((Square::A8, Square::D8)),
        _ => None,
    }
}

/// Generate pseudo-legal king steps and castling moves from `src`.
///
/// Castling requires the king not to be in check and the transit square not to be
/// attacked; whether the destination is attacked is left to the legality filter.
pub(super) fn gen_king(board: &Board, src: Square, list: &mut Vec<Move>) {
    super::gen_steps(board, src, &KING_STEPS, list);

    let us = board.side_to_move();
    let them = !us;
    let rights = board.castling();
    let mut in_check = None;

    for side in CastleSide::ALL {
        if !rights.has(us, side) {
            continue;
        }
        let path = castle_path(us, side);
        if src != path.king_from
            || board.piece_on(path.rook_from) != Some(Piece::new(PieceKind::Rook, us))
            || path.empty.iter().any(|&sq| board.piece_on(sq).is_some())
        {
            continue;
        }
        if *in_check.get_or_insert_with(|| board.is_square_attacked(src, them)) {
            return;
        }
        if board.is_square_attacked(path.transit, them) {
            continue;
        }
        list.push(Move::new(path.king_from, path.king_to));
    }
}
