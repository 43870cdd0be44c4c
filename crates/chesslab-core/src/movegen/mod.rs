//! Pseudo-legal and legal move generation.
//!
//! Generation walks the board from a1 to h8; moves come out grouped by origin
//! square in that order, which is the enumeration order searches tie-break on.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

pub(crate) use self::king::castle_rook_squares;

/// Generate every pseudo-legal move for the side to move.
///
/// Moves may leave the mover's own king attacked; castling is only offered when
/// the king is not in check and does not pass over an attacked square.
pub fn generate_pseudo_legal(board: &Board) -> Vec<Move> {
    let us = board.side_to_move();
    let mut list = Vec::with_capacity(64);

    for (src, piece) in board.pieces() {
        if piece.color != us {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => gen_pawn(board, src, &mut list),
            PieceKind::Knight => gen_knight(board, src, &mut list),
            PieceKind::King => gen_king(board, src, &mut list),
            kind => gen_slider(board, src, kind, &mut list),
        }
    }
    list
}

/// Generate all legal moves for the current position.
pub fn generate_legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = generate_pseudo_legal(board);
    moves.retain(|&mv| board.is_legal_move(mv));
    moves
}

/// Push single steps from `src` onto empty or enemy-occupied squares.
fn gen_steps(board: &Board, src: Square, steps: &[(i8, i8)], list: &mut Vec<Move>) {
    let us = board.side_to_move();
    for &(dr, df) in steps {
        if let Some(dst) = src.offset(dr, df)
            && board.piece_on(dst).is_none_or(|piece| piece.color != us)
        {
            list.push(Move::new(src, dst));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_20_moves() {
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board);
        assert_eq!(
            moves.len(),
            20,
            "starting position should have 20 legal moves, got {}",
            moves.len()
        );
        assert_eq!(generate_pseudo_legal(&board).len(), 20);
    }

    #[test]
    fn moves_are_grouped_by_origin_square() {
        let board = Board::starting_position();
        let moves = generate_legal_moves(&board);
        // b1 knight moves come before any pawn move.
        assert_eq!(moves[0].from, Square::B1);
        assert!(
            moves.windows(2).all(|w| w[0].from.index() <= w[1].from.index()),
            "moves should be ordered by origin square"
        );
    }

    #[test]
    fn pinned_knight_zero_moves() {
        // King on e1, knight on e2, rook on e8: knight is pinned along the e-file
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(
            moves.iter().all(|m| m.from != Square::E2),
            "pinned knight should have 0 moves"
        );
        assert!(generate_pseudo_legal(&board).iter().any(|m| m.from == Square::E2));
    }

    #[test]
    fn double_check_king_only() {
        // King e1, black knight f3 + black rook e8: double check
        let board: Board = "4r1k1/8/8/8/8/5n2/8/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(
                board.piece_on(mv.from).map(|p| p.kind),
                Some(PieceKind::King),
                "in double check, only king moves should be legal, but got {mv}"
            );
        }
    }

    #[test]
    fn castling_both_sides_available() {
        let board: Board = "4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(moves.contains(&Move::new(Square::E1, Square::G1)));
        assert!(moves.contains(&Move::new(Square::E1, Square::C1)));
    }

    #[test]
    fn castling_not_through_check() {
        // Bishop on a6 attacks f1 (a6-b5-c4-d3-e2-f1), preventing kingside castling
        let board: Board = "4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        let moves = generate_pseudo_legal(&board);
        assert!(
            !moves.contains(&Move::new(Square::E1, Square::G1)),
            "should not castle kingside through attacked f1"
        );
        assert!(moves.contains(&Move::new(Square::E1, Square::C1)));
    }

    #[test]
    fn castling_into_check_filtered_by_legality() {
        // Rook on g8 attacks g1 but not f1: pseudo-legal, not legal.
        let board: Board = "4k1r1/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        let castle = Move::new(Square::E1, Square::G1);
        assert!(generate_pseudo_legal(&board).contains(&castle));
        assert!(!generate_legal_moves(&board).contains(&castle));
    }

    #[test]
    fn no_castling_out_of_check() {
        // Rook on e8 checks the white king.
        let board: Board = "4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1".parse().unwrap();
        assert!(board.is_check(Color::White));
        let moves = generate_pseudo_legal(&board);
        assert!(!moves.contains(&Move::new(Square::E1, Square::G1)));
        assert!(!moves.contains(&Move::new(Square::E1, Square::C1)));
    }

    #[test]
    fn no_castling_with_blocked_path() {
        // Knight on b1 blocks the queenside.
        let board: Board = "4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1".parse().unwrap();
        let moves = generate_pseudo_legal(&board);
        assert!(!moves.contains(&Move::new(Square::E1, Square::C1)));
        assert!(moves.contains(&Move::new(Square::E1, Square::G1)));
    }

    #[test]
    fn en_passant_legal() {
        // White pawn e5, black pawn d5 just moved, EP square d6
        let board: Board = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(moves.contains(&Move::new(Square::E5, Square::D6)));
    }

    #[test]
    fn en_passant_discovered_check_illegal() {
        // White king a5, white pawn b5, black pawn c5 (just double-pushed),
        // black rook h5. EP capture bxc6 would expose king to rook on h5.
        let board: Board = "4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1".parse().unwrap();
        let ep = Move::new(Square::B5, Square::C6);
        assert!(generate_pseudo_legal(&board).contains(&ep));
        assert!(
            !generate_legal_moves(&board).contains(&ep),
            "EP should be illegal due to discovered check"
        );
    }

    #[test]
    fn promotion_generates_4_moves() {
        // White pawn on a7 about to promote
        let board: Board = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        let promos: Vec<_> = moves.iter().filter(|m| m.is_promotion()).collect();
        assert_eq!(promos.len(), 4, "promotion should generate 4 moves (Q/R/B/N)");
        assert_eq!(promos[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn black_double_push_and_capture_promotion() {
        let board: Board = "4k3/3p4/8/8/8/8/6p1/4K2R b - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(moves.contains(&Move::new(Square::D7, Square::D5)));
        assert!(moves.contains(&Move::new_promotion(Square::G2, Square::H1, PieceKind::Knight)));
        assert!(moves.contains(&Move::new_promotion(Square::G2, Square::G1, PieceKind::Queen)));
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let board: Board = "4k3/8/8/8/8/4p3/4P3/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_legal_moves(&board);
        assert!(moves.iter().all(|m| m.from != Square::E2));
    }
}
