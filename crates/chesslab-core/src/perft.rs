//! Leaf counts of the legal move tree, for checking move generation against known values.

use crate::board::Board;
use crate::position::Position;

/// Number of leaves `depth` plies below `board`.
///
/// The last ply is bulk-counted: its moves are generated but never made.
pub fn perft(board: &Board, depth: usize) -> u64 {
    match depth {
        0 => 1,
        1 => board.legal_moves().len() as u64,
        _ => board
            .legal_moves()
            .into_iter()
            .map(|mv| perft(&board.make_move(mv), depth - 1))
            .sum(),
    }
}

/// Per-root-move leaf counts, keyed by UCI move text and sorted by it.
pub fn divide(board: &Board, depth: usize) -> Vec<(String, u64)> {
    let below = depth.saturating_sub(1);
    let mut counts: Vec<(String, u64)> = board
        .legal_moves()
        .into_iter()
        .map(|mv| (mv.to_string(), perft(&board.make_move(mv), below)))
        .collect();
    counts.sort_unstable_by(|a, b| a.0.cmp(&b.0));
    counts
}
