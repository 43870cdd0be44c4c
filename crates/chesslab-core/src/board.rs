//! Mailbox board representation and its accessors.

use std::fmt;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout shared by both sides in the starting position.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete chess position state, stored as a 64-square mailbox.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Piece on each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    /// Square a pawn skipped over on the last move, if any.
    en_passant: Option<Square>,
    /// Plies since the last capture or pawn move.
    halfmove_clock: u16,
    /// Starts at 1; ticks after each Black move.
    fullmove_number: u16,
}

impl Board {
    /// An empty board with White to move and no rights.
    pub(crate) fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The initial position of a standard game.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            for color in Color::ALL {
                let back = match color {
                    Color::White => 0,
                    Color::Black => 7,
                };
                board.put(square_at(back, file), Some(Piece::new(kind, color)));
                board.put(
                    square_at(color.pawn_rank(), file),
                    Some(Piece::new(PieceKind::Pawn, color)),
                );
            }
        }
        board.castling = CastleRights::ALL;
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Place `piece` on `sq` (or clear it with `None`).
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Remove and return the piece on `sq`.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over every occupied square with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Return the square of `color`'s king, if it has one.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.piece_on(sq) == Some(king))
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Plies since the last capture or pawn move.
    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    #[inline]
    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    #[inline]
    pub(crate) fn set_halfmove_clock(&mut self, clock: u16) {
        self.halfmove_clock = clock;
    }

    #[inline]
    pub(crate) fn set_fullmove_number(&mut self, number: u16) {
        self.fullmove_number = number;
    }

    /// The color-reversed position: ranks flipped, colors and side to move swapped.
    ///
    /// Every evaluation from White's point of view negates under this mapping.
    pub fn mirrored(&self) -> Board {
        let mut mirror = *self;
        for sq in Square::all() {
            mirror.put(sq.flip_vertical(), self.piece_on(sq).map(Piece::flip_color));
        }
        mirror.side_to_move = !self.side_to_move;
        mirror.castling = self.castling.flip_colors();
        mirror.en_passant = self.en_passant.map(Square::flip_vertical);
        mirror
    }

    /// Reject positions where a side lacks exactly one king or a pawn stands on a back rank.
    ///
    /// The side that just moved must not be left in check.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            let count = self.pieces().filter(|&(_, piece)| piece == king).count() as u32;
            if count != 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::InvalidKingCount {
                    color: color_name,
                    count,
                });
            }
        }

        let pawn_on_back_rank = self
            .pieces()
            .any(|(sq, piece)| piece.kind == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7));
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        let them = !self.side_to_move;
        if let Some(king_sq) = self.king_square(them)
            && self.is_square_attacked(king_sq, self.side_to_move)
        {
            return Err(BoardError::OpponentInCheck);
        }

        Ok(())
    }

    /// 8x8 text diagram, rank 8 at the top.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Square from a rank and file that are known to be on the board.
#[inline]
pub(crate) fn square_at(rank: u8, file: u8) -> Square {
    debug_assert!(rank < 8 && file < 8);
    Square::from_index(rank * 8 + file).unwrap_or(Square::A1)
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// [`Display`](fmt::Display) adapter returned by [`Board::pretty`].
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = board.piece_on(square_at(rank, file)).map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
