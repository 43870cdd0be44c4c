//! Forsyth-Edwards Notation: `FromStr` and `Display` for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, square_at};
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Board {
    type Err = FenError;

    /// Parse all six fields, then reject positions that fail [`Board::validate`].
    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        };

        let mut board = Board::empty();
        place_pieces(&mut board, placement)?;
        board.set_side_to_move(parse_side(side)?);
        board.set_castling(CastleRights::from_fen(castling)?);
        board.set_en_passant(parse_en_passant(en_passant)?);
        board.set_halfmove_clock(parse_counter(halfmove, "halfmove clock")?);
        board.set_fullmove_number(parse_counter(fullmove, "fullmove number")?);

        board.validate()?;
        Ok(board)
    }
}

/// Fill `board` from the placement field, rank 8 first.
fn place_pieces(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (rank_index, text) in ranks.into_iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut width = 0usize;
        for c in text.chars() {
            match c.to_digit(10) {
                Some(run @ 1..=8) => width += run as usize,
                Some(_) => return Err(FenError::InvalidPieceChar { character: c }),
                None => {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                    if width < 8 {
                        board.put(square_at(rank, width as u8), Some(piece));
                    }
                    width += 1;
                }
            }
            if width > 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: width,
                });
            }
        }
        if width != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: width,
            });
        }
    }
    Ok(())
}

fn parse_side(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenError::InvalidColor {
            found: field.to_string(),
        }),
    }
}

/// `-` or a square on the third or sixth rank.
fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    Square::from_algebraic(field)
        .filter(|sq| matches!(sq.rank(), 2 | 5))
        .map(Some)
        .ok_or_else(|| FenError::InvalidEnPassant {
            found: field.to_string(),
        })
}

fn parse_counter(field: &str, name: &'static str) -> Result<u16, FenError> {
    field.parse().map_err(|_| FenError::InvalidMoveCounter {
        field: name,
        found: field.to_string(),
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut gap = 0;
            for file in 0u8..8 {
                let Some(piece) = self.piece_on(square_at(rank, file)) else {
                    gap += 1;
                    continue;
                };
                if gap > 0 {
                    write!(f, "{gap}")?;
                    gap = 0;
                }
                write!(f, "{piece}")?;
            }
            if gap > 0 {
                write!(f, "{gap}")?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
