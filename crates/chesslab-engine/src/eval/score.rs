//! Score type and the constants that bound it.

/// Evaluation score in centipawns, from White's perspective.
pub type Score = i32;

/// Checkmate score, signed by the side that delivers mate.
///
/// Larger than any material plus piece-square sum a legal position can reach.
pub const MATE_SCORE: Score = 100_000;

/// Open search window bound. Strictly outside `[-MATE_SCORE, MATE_SCORE]`.
pub const INF: Score = 1_000_000;

/// Bonus for giving check: added when Black's king is attacked, subtracted when White's is.
pub const CHECK_BONUS: Score = 50;

#[cfg(test)]
mod tests {
    use chesslab_core::PieceKind;

    use super::{CHECK_BONUS, INF, MATE_SCORE};
    use crate::eval::material::piece_value;

    #[test]
    fn mate_dominates_any_material_sum() {
        // Nine queens plus every minor and major piece, with a table bonus of at most 100 per piece.
        let heaviest = 9 * piece_value(PieceKind::Queen)
            + 2 * (piece_value(PieceKind::Rook)
                + piece_value(PieceKind::Bishop)
                + piece_value(PieceKind::Knight));
        assert!(heaviest + 16 * 100 + CHECK_BONUS < MATE_SCORE);
        assert!(MATE_SCORE < INF);
    }
}
