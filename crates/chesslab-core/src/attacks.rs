//! Attack detection by stepping offsets and sliding rays over the mailbox.

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Knight jumps as `(d_rank, d_file)`.
pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// King steps as `(d_rank, d_file)`.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Orthogonal ray directions.
pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Diagonal ray directions.
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Queens slide along both.
pub(crate) const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (-1, 1),
    (-1, -1),
    (1, -1),
];

/// Walk from `from` along `dir` and return the first occupied square, if any.
pub(crate) fn first_blocker(board: &Board, from: Square, dir: (i8, i8)) -> Option<(Square, Piece)> {
    let mut cur = from;
    while let Some(next) = cur.offset(dir.0, dir.1) {
        if let Some(piece) = board.piece_on(next) {
            return Some((next, piece));
        }
        cur = next;
    }
    None
}

impl Board {
    /// Return `true` if any piece of `by` attacks `sq`.
    ///
    /// Pawns attack diagonally forward only; pushes never count as attacks.
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        let hits = |steps: &[(i8, i8)], kind: PieceKind| {
            steps.iter().any(|&(dr, df)| {
                sq.offset(dr, df)
                    .and_then(|from| self.piece_on(from))
                    == Some(Piece::new(kind, by))
            })
        };

        if hits(&KNIGHT_STEPS, PieceKind::Knight) || hits(&KING_STEPS, PieceKind::King) {
            return true;
        }

        // An attacking pawn sits one rank behind `sq` from its own point of view.
        let back = -by.forward();
        if hits(&[(back, -1), (back, 1)], PieceKind::Pawn) {
            return true;
        }

        let slides = |dirs: &[(i8, i8)], kind: PieceKind| {
            dirs.iter().any(|&dir| {
                matches!(
                    first_blocker(self, sq, dir),
                    Some((_, piece)) if piece.color == by
                        && (piece.kind == kind || piece.kind == PieceKind::Queen)
                )
            })
        };

        slides(&ROOK_DIRS, PieceKind::Rook) || slides(&BISHOP_DIRS, PieceKind::Bishop)
    }
}
