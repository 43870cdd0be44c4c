//! Piece kinds, independent of color.

use std::fmt;

/// What a piece is, not whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Lowercase FEN letters, in discriminant order.
const LETTERS: [char; PieceKind::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];

impl PieceKind {
    pub const COUNT: usize = 6;

    /// Every kind, pawn first.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Kinds a pawn may promote to, strongest first.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Table index, 0 for pawn through 5 for king.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        LETTERS[self.index()]
    }

    /// Kind named by a FEN letter of either case.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        let lower = c.to_ascii_lowercase();
        LETTERS
            .iter()
            .position(|&letter| letter == lower)
            .map(|i| PieceKind::ALL[i])
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
