//! Static evaluation.

pub mod material;
pub mod pst;
pub mod score;

use chesslab_core::{Color, Position, Square};

use self::material::piece_value;
use self::pst::pst_value;
use self::score::{CHECK_BONUS, Score};

/// Evaluate a position from White's perspective.
///
/// Sums material and piece-square bonuses for every piece (White adds, Black
/// subtracts), then applies [`CHECK_BONUS`] for whichever king is in check.
/// The result negates exactly when the position is color-mirrored.
pub fn evaluate<P: Position>(pos: &P) -> Score {
    let mut score: Score = Square::all()
        .filter_map(|sq| pos.piece_at(sq).map(|piece| (sq, piece)))
        .map(|(sq, piece)| {
            let value = piece_value(piece.kind) + pst_value(piece.kind, piece.color, sq);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum();

    if pos.is_check(Color::Black) {
        score += CHECK_BONUS;
    }
    if pos.is_check(Color::White) {
        score -= CHECK_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use chesslab_core::{Board, Color, PieceKind, Square};

    use super::evaluate;
    use super::pst::pst_value;
    use super::score::CHECK_BONUS;

    const FENS: [&str; 5] = [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        "4k3/8/8/8/8/8/8/4K2R b K - 0 1",
    ];

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate(&Board::starting_position()), 0);
    }

    #[test]
    fn mirrored_position_negates_score() {
        for fen in FENS {
            let board: Board = fen.parse().unwrap();
            assert_eq!(
                evaluate(&board),
                -evaluate(&board.mirrored()),
                "evaluation should be antisymmetric for {fen}"
            );
        }
    }

    #[test]
    fn check_bonus_applies_to_checking_side() {
        // Same material; the rook on a8 gives check.
        let quiet: Board = "4k3/8/8/8/8/8/8/R3K3 b Q - 0 1".parse().unwrap();
        let check: Board = "R3k3/8/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let rook_delta = pst_value(PieceKind::Rook, Color::White, Square::A8)
            - pst_value(PieceKind::Rook, Color::White, Square::A1);
        assert_eq!(evaluate(&check) - evaluate(&quiet), rook_delta + CHECK_BONUS);
    }

    #[test]
    fn fools_mate_penalises_white() {
        let board: Board = FENS[3].parse().unwrap();
        assert!(evaluate(&board) < 0);
    }
}
