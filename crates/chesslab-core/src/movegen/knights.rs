//! Knight move generation.

use crate::attacks::KNIGHT_STEPS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::square::Square;

/// Generate pseudo-legal knight moves from `src`.
pub(super) fn gen_knight(board: &Board, src: Square, list: &mut Vec<Move>) {
    super::gen_steps(board, src, &KNIGHT_STEPS, list);
}
