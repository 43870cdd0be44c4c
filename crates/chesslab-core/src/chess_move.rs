//! Chess move representation.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A move: source square, destination square and an optional promotion piece.
///
/// Castling is encoded as the king's two-square step (`e1g1`) and en passant
/// as the pawn's diagonal step onto the en passant square; the board infers
/// the side effects when the move is made. Equality is structural.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Create a non-promoting move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(from: Square, to: Square, kind: PieceKind) -> Move {
        Move {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Return `true` if this move promotes a pawn.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Parse UCI long algebraic notation (`e2e4`, `e7e8q`).
    ///
    /// Only the syntax is checked; whether the move is legal is up to the board.
    pub fn from_uci(s: &str) -> Option<Move> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => match PieceKind::from_fen_char(c)? {
                kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen) => {
                    Some(kind)
                }
                _ => return None,
            },
        };
        Some(Move {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
