//! The rules interface searches are written against.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::generate_pseudo_legal;
use crate::piece::Piece;
use crate::square::Square;

/// A game state that can enumerate, apply and check moves.
///
/// Implementors supply the primitive queries; legality is derived from them in
/// one place so every caller agrees on which moves are legal.
pub trait Position: Clone {
    /// Side to move.
    fn turn(&self) -> Color;

    /// Piece on `sq`, if any.
    fn piece_at(&self, sq: Square) -> Option<Piece>;

    /// Moves that obey piece movement rules but may leave the mover in check.
    fn generate_pseudo_legal(&self) -> Vec<Move>;

    /// Apply `mv` in place. `mv` must be pseudo-legal for this position.
    fn make(&mut self, mv: Move);

    /// Square of `side`'s king, or `None` if it has none.
    fn kings_pos(&self, side: Color) -> Option<Square>;

    /// Whether any piece of `by` attacks `sq`.
    fn is_square_attacked(&self, sq: Square, by: Color) -> bool;

    /// The opponent of `side`.
    fn enemy(&self, side: Color) -> Color {
        !side
    }

    /// Whether `side`'s king is attacked. A side without a king is never in check.
    fn is_check(&self, side: Color) -> bool {
        self.kings_pos(side)
            .is_some_and(|king| self.is_square_attacked(king, self.enemy(side)))
    }

    /// Whether the pseudo-legal `mv` keeps the mover's own king safe.
    fn is_legal_move(&self, mv: Move) -> bool {
        let mover = self.turn();
        let mut child = self.clone();
        child.make(mv);
        !child.is_check(mover)
    }

    /// All legal moves, in pseudo-legal generation order.
    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = self.generate_pseudo_legal();
        moves.retain(|&mv| self.is_legal_move(mv));
        moves
    }
}

impl Position for Board {
    #[inline]
    fn turn(&self) -> Color {
        self.side_to_move()
    }

    #[inline]
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.piece_on(sq)
    }

    fn generate_pseudo_legal(&self) -> Vec<Move> {
        generate_pseudo_legal(self)
    }

    #[inline]
    fn make(&mut self, mv: Move) {
        Board::make(self, mv);
    }

    fn kings_pos(&self, side: Color) -> Option<Square> {
        self.king_square(side)
    }

    #[inline]
    fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        Board::is_square_attacked(self, sq, by)
    }

    /// Copy-make on the stack instead of the generic clone-then-make.
    fn is_legal_move(&self, mv: Move) -> bool {
        let child = self.make_move(mv);
        !Position::is_check(&child, self.side_to_move())
    }
}
