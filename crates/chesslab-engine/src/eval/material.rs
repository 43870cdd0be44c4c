//! Material values and material balance.
//!
//! All scores are returned from White's perspective (positive = White ahead).

use chesslab_core::{Color, PieceKind, Position, Square};

use crate::eval::score::Score;

/// Base material values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   | 100   |
/// | Knight | 320   |
/// | Bishop | 330   |
/// | Rook   | 500   |
/// | Queen  | 900   |
/// | King   |   0   |
pub const MATERIAL_VALUE: [Score; PieceKind::COUNT] = [
    100, // Pawn
    320, // Knight
    330, // Bishop
    500, // Rook
    900, // Queen
    0,   // King
];

/// Material value of a single piece kind.
#[inline]
pub const fn piece_value(kind: PieceKind) -> Score {
    MATERIAL_VALUE[kind.index()]
}

/// Material balance from White's perspective.
pub fn material<P: Position>(pos: &P) -> Score {
    Square::all()
        .filter_map(|sq| pos.piece_at(sq))
        .map(|piece| match piece.color {
            Color::White => piece_value(piece.kind),
            Color::Black => -piece_value(piece.kind),
        })
        .sum()
}
