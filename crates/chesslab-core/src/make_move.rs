//! Move execution: in-place `make` and copy-make `make_move`.

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::castle_rook_squares;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply `mv` in place.
    ///
    /// The move is assumed pseudo-legal for this position. Castling is recognised
    /// as a king moving two files, en passant as a pawn moving diagonally onto the
    /// en passant square. If the source square is empty the board is left unchanged.
    pub fn make(&mut self, mv: Move) {
        let us = self.side_to_move();
        let (src, dst) = (mv.from, mv.to);

        let Some(moving) = self.take(src) else {
            return;
        };

        let mut reset_clock = moving.kind == PieceKind::Pawn || self.piece_on(dst).is_some();

        match moving.kind {
            PieceKind::Pawn if Some(dst) == self.en_passant() && src.file() != dst.file() => {
                // The captured pawn sits beside the mover, on the destination file.
                if let Some(victim) = dst.offset(-us.forward(), 0) {
                    self.take(victim);
                }
                reset_clock = true;
            }
            PieceKind::King if src.file().abs_diff(dst.file()) == 2 => {
                if let Some((rook_from, rook_to)) = castle_rook_squares(dst) {
                    let rook = self.take(rook_from);
                    self.put(rook_to, rook);
                }
            }
            _ => {}
        }

        let placed = match mv.promotion {
            Some(kind) if moving.kind == PieceKind::Pawn => Piece::new(kind, us),
            _ => moving,
        };
        self.put(dst, Some(placed));

        let double_push = moving.kind == PieceKind::Pawn && src.rank().abs_diff(dst.rank()) == 2;
        self.set_en_passant(if double_push {
            src.offset(us.forward(), 0)
        } else {
            None
        });

        let revoked = CastleRights::revoked_by(src) | CastleRights::revoked_by(dst);
        self.set_castling(self.castling() - revoked);

        self.set_halfmove_clock(if reset_clock {
            0
        } else {
            self.halfmove_clock().saturating_add(1)
        });
        if us == Color::Black {
            self.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        self.set_side_to_move(!us);
    }

    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    #[inline]
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.make(mv);
        next
    }
}
