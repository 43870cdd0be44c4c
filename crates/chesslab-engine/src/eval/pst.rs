//! Piece-square tables (PST) for all six piece types.
//!
//! All tables are defined from White's perspective in LERF order:
//! index 0 = A1, index 7 = H1, index 8 = A2, ..., index 63 = H8.
//! Use [`pst_value`] to look up the value for either color.

use chesslab_core::{Color, PieceKind, Square};

use crate::eval::score::Score;

/// Pawn PST. Rank 1 and rank 8 entries are zero: pawns never stand there.
#[rustfmt::skip]
const PAWN_PST: [Score; 64] = [
    // Rank 1
      0,   0,   0,   0,   0,   0,   0,   0,
    // Rank 2
      5,  10,  10, -20, -20,  10,  10,   5,
    // Rank 3
      5,  -5, -10,   0,   0, -10,  -5,   5,
    // Rank 4
      0,   0,   0,  20,  20,   0,   0,   0,
    // Rank 5
      5,   5,  10,  25,  25,  10,   5,   5,
    // Rank 6
     10,  10,  20,  30,  30,  20,  10,  10,
    // Rank 7
     50,  50,  50,  50,  50,  50,  50,  50,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const KNIGHT_PST: [Score; 64] = [
    // Rank 1
    -50, -40, -30, -30, -30, -30, -40, -50,
    // Rank 2
    -40, -20,   0,   5,   5,   0, -20, -40,
    // Rank 3
    -30,   5,  10,  15,  15,  10,   5, -30,
    // Rank 4
    -30,   0,  15,  20,  20,  15,   0, -30,
    // Rank 5
    -30,   5,  15,  20,  20,  15,   5, -30,
    // Rank 6
    -30,   0,  10,  15,  15,  10,   0, -30,
    // Rank 7
    -40, -20,   0,   0,   0,   0, -20, -40,
    // Rank 8
    -50, -40, -30, -30, -30, -30, -40, -50,
];

#[rustfmt::skip]
const BISHOP_PST: [Score; 64] = [
    // Rank 1
    -20, -10, -10, -10, -10, -10, -10, -20,
    // Rank 2
    -10,   5,   0,   0,   0,   0,   5, -10,
    // Rank 3
    -10,   5,   5,   5,   5,   5,   5, -10,
    // Rank 4
    -10,   5,   5,  10,  10,   5,   5, -10,
    // Rank 5
    -10,   0,   5,  10,  10,   5,   0, -10,
    // Rank 6
    -10,  10,   0,   5,   5,   0,  10, -10,
    // Rank 7
    -10,   0,   0,   0,   0,   0,   0, -10,
    // Rank 8
    -20, -10, -10, -10, -10, -10, -10, -20,
];

#[rustfmt::skip]
const ROOK_PST: [Score; 64] = [
    // Rank 1
      0,   0,   0,   5,   5,   0,   0,   0,
    // Rank 2
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 3
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 4
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 5
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 6
     -5,   0,   0,   0,   0,   0,   0,  -5,
    // Rank 7
      5,  10,  10,  10,  10,  10,  10,   5,
    // Rank 8
      0,   0,   0,   0,   0,   0,   0,   0,
];

#[rustfmt::skip]
const QUEEN_PST: [Score; 64] = [
    // Rank 1
    -20, -10, -10,  -5,  -5, -10, -10, -20,
    // Rank 2
    -10,   0,   5,   0,   0,   5,   0, -10,
    // Rank 3
    -10,   5,   5,   5,   5,   5,   5, -10,
    // Rank 4
      0,   0,   5,   5,   5,   5,   0,   0,
    // Rank 5
     -5,   0,   5,   5,   5,   5,   0,  -5,
    // Rank 6
    -10,   0,   5,   5,   5,   5,   0, -10,
    // Rank 7
    -10,   0,   0,   0,   0,   0,   0, -10,
    // Rank 8
    -20, -10, -10,  -5,  -5, -10, -10, -20,
];

/// King PST. Rewards the castled corners and keeps the king off the open centre.
#[rustfmt::skip]
const KING_PST: [Score; 64] = [
    // Rank 1
     20,  30,  10,   0,   0,  10,  30,  20,
    // Rank 2
     20,  20,   0,   0,   0,   0,  20,  20,
    // Rank 3
    -10, -20, -20, -20, -20, -20, -20, -10,
    // Rank 4
    -20, -30, -30, -40, -40, -30, -30, -20,
    // Rank 5
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 6
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 7
    -30, -40, -40, -50, -50, -40, -40, -30,
    // Rank 8
    -30, -40, -40, -50, -50, -40, -40, -30,
];

/// Piece-square table values indexed `[piece_kind][square]`.
///
/// Use [`pst_value`] rather than indexing this directly, so that color
/// mirroring is handled correctly.
pub static PST: [[Score; 64]; PieceKind::COUNT] = [
    PAWN_PST,
    KNIGHT_PST,
    BISHOP_PST,
    ROOK_PST,
    QUEEN_PST,
    KING_PST,
];

/// Look up the PST bonus for a piece of the given kind and color on `sq`.
///
/// For Black pieces the square is mirrored vertically (`sq ^ 56`).
#[inline]
pub fn pst_value(kind: PieceKind, color: Color, sq: Square) -> Score {
    let sq = match color {
        Color::White => sq,
        Color::Black => sq.flip_vertical(),
    };
    PST[kind.index()][sq.index()]
}
