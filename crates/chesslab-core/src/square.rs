//! Board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

macro_rules! named_squares {
    ($rank:literal; $($name:ident = $file:literal),+) => {
        $(pub const $name: Square = Square($rank * 8 + $file);)+
    };
}

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so A1 = 0, B1 = 1, ..., H8 = 63.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from zero-based rank and file, returning `None` off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Square::new(rank_byte - b'1', file_byte - b'a')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Zero-based rank (0 = rank 1).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Zero-based file (0 = file a).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Step by `(d_rank, d_file)`, returning `None` when the step leaves the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank() as i8 + d_rank;
        let file = self.file() as i8 + d_file;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    /// Mirror across the horizontal midline (A1 <-> A8).
    #[inline]
    pub const fn flip_vertical(self) -> Square {
        Square(self.0 ^ 56)
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    // Named square constants, one rank per row.
    named_squares!(0; A1 = 0, B1 = 1, C1 = 2, D1 = 3, E1 = 4, F1 = 5, G1 = 6, H1 = 7);
    named_squares!(1; A2 = 0, B2 = 1, C2 = 2, D2 = 3, E2 = 4, F2 = 5, G2 = 6, H2 = 7);
    named_squares!(2; A3 = 0, B3 = 1, C3 = 2, D3 = 3, E3 = 4, F3 = 5, G3 = 6, H3 = 7);
    named_squares!(3; A4 = 0, B4 = 1, C4 = 2, D4 = 3, E4 = 4, F4 = 5, G4 = 6, H4 = 7);
    named_squares!(4; A5 = 0, B5 = 1, C5 = 2, D5 = 3, E5 = 4, F5 = 5, G5 = 6, H5 = 7);
    named_squares!(5; A6 = 0, B6 = 1, C6 = 2, D6 = 3, E6 = 4, F6 = 5, G6 = 6, H6 = 7);
    named_squares!(6; A7 = 0, B7 = 1, C7 = 2, D7 = 3, E7 = 4, F7 = 5, G7 = 6, H7 = 7);
    named_squares!(7; A8 = 0, B8 = 1, C8 = 2, D8 = 3, E8 = 4, F8 = 5, G8 = 6, H8 = 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        write!(f, "{}{}", file, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
