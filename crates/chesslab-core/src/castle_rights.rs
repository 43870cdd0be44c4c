//! Castling rights as a four-bit set.

use std::fmt;
use std::ops::{BitOr, Sub};

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing the king castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];
}

/// Set of remaining castling rights. Bits, low to high: `K`, `Q`, `k`, `q`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

/// FEN letters in bit order.
const LETTERS: [char; 4] = ['K', 'Q', 'k', 'q'];

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(1);
    pub const WHITE_QUEEN: CastleRights = CastleRights(1 << 1);
    pub const BLACK_KING: CastleRights = CastleRights(1 << 2);
    pub const BLACK_QUEEN: CastleRights = CastleRights(1 << 3);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// The single right for `color` castling toward `side`.
    pub const fn of(color: Color, side: CastleSide) -> CastleRights {
        let shift = match color {
            Color::White => 0,
            Color::Black => 2,
        } + match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        CastleRights(1 << shift)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every right in `other` is also in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::of(color, side))
    }

    /// White's rights become Black's and vice versa.
    #[inline]
    pub const fn flip_colors(self) -> CastleRights {
        CastleRights((self.0 >> 2) | ((self.0 & 0b0011) << 2))
    }

    /// Rights lost when a piece leaves or lands on `sq`.
    ///
    /// King home squares revoke both rights of that color; rook corners revoke one.
    pub const fn revoked_by(sq: Square) -> CastleRights {
        match sq.index() {
            4 => Self::WHITE_BOTH,
            0 => Self::WHITE_QUEEN,
            7 => Self::WHITE_KING,
            60 => Self::BLACK_BOTH,
            56 => Self::BLACK_QUEEN,
            63 => Self::BLACK_KING,
            _ => Self::NONE,
        }
    }

    /// Parse the FEN castling field: `-` or any of `KQkq`.
    pub fn from_fen(field: &str) -> Result<CastleRights, FenError> {
        if field == "-" {
            return Ok(CastleRights::NONE);
        }
        field.chars().try_fold(CastleRights::NONE, |rights, c| {
            let bit = LETTERS
                .iter()
                .position(|&letter| letter == c)
                .ok_or(FenError::InvalidCastlingChar { character: c })?;
            Ok(rights | CastleRights(1 << bit))
        })
    }
}

impl BitOr for CastleRights {
    type Output = CastleRights;

    #[inline]
    fn bitor(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 | rhs.0)
    }
}

impl Sub for CastleRights {
    type Output = CastleRights;

    /// Rights in `self` that are not in `rhs`.
    #[inline]
    fn sub(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 & !rhs.0)
    }
}

/// FEN castling field.
impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (bit, letter) in LETTERS.into_iter().enumerate() {
            if self.0 & (1 << bit) != 0 {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_field_survives_display() {
        for field in ["KQkq", "Kq", "k", "-", "KQ", "kq"] {
            assert_eq!(CastleRights::from_fen(field).unwrap().to_string(), field);
        }
        // Order in the input does not matter.
        assert_eq!(CastleRights::from_fen("qkQK").unwrap(), CastleRights::ALL);
    }

    #[test]
    fn from_fen_invalid() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn has_color_side() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn of_matches_named_constants() {
        assert_eq!(CastleRights::of(Color::White, CastleSide::KingSide), CastleRights::WHITE_KING);
        assert_eq!(CastleRights::of(Color::Black, CastleSide::QueenSide), CastleRights::BLACK_QUEEN);
        assert_eq!(
            CastleRights::WHITE_KING | CastleRights::WHITE_QUEEN,
            CastleRights::WHITE_BOTH
        );
    }

    #[test]
    fn subtraction_removes_rights() {
        let left = CastleRights::ALL - CastleRights::WHITE_BOTH;
        assert_eq!(left, CastleRights::BLACK_BOTH);
        assert_eq!(left - CastleRights::WHITE_KING, left);
    }

    #[test]
    fn flip_colors_swaps_halves() {
        let rights = CastleRights::from_fen("Kq").unwrap();
        assert_eq!(rights.flip_colors().to_string(), "Qk");
        assert_eq!(CastleRights::ALL.flip_colors(), CastleRights::ALL);
    }

    #[test]
    fn revoked_by_home_squares() {
        assert_eq!(CastleRights::revoked_by(Square::E1), CastleRights::WHITE_BOTH);
        assert_eq!(CastleRights::revoked_by(Square::A8), CastleRights::BLACK_QUEEN);
        assert_eq!(CastleRights::revoked_by(Square::H8), CastleRights::BLACK_KING);
        assert_eq!(CastleRights::revoked_by(Square::E4), CastleRights::NONE);
    }
}
