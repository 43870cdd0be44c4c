//! Anytime iterative deepening over [`alphabeta_root`].

use chesslab_core::{Move, Position};
use tracing::{debug, trace};

use crate::search::SearchResult;
use crate::search::alphabeta::alphabeta_root;
use crate::search::ordering::order_moves;

/// Lazy iterator over ever-better moves for one position.
///
/// The first value is the head of the ordered legal moves and costs no search.
/// Each later value is the best move of the next completed depth, starting at 1,
/// with the previous best searched first. The iterator never times itself:
/// the consumer stops pulling when it runs out of time.
#[derive(Debug, Clone)]
pub struct IterativeDeepening<P: Position> {
    position: P,
    /// Next depth to search; 0 until the instant move has been yielded.
    next_depth: u8,
    max_depth: u8,
    best: Option<Move>,
    last: Option<SearchResult>,
    done: bool,
}

impl<P: Position> IterativeDeepening<P> {
    /// Start deepening from `position`, with no depth limit.
    pub fn new(position: P) -> Self {
        Self {
            position,
            next_depth: 0,
            max_depth: u8::MAX,
            best: None,
            last: None,
            done: false,
        }
    }

    /// Stop after completing `depth` plies.
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Result of the most recently completed depth, if any.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last.as_ref()
    }

    /// Best move yielded so far.
    pub fn best_move(&self) -> Option<Move> {
        self.best
    }

    fn first_move(&mut self) -> Option<Move> {
        self.next_depth = 1;
        let ordered = order_moves(&self.position, self.position.legal_moves());
        let first = ordered.first().copied();
        match first {
            Some(mv) => trace!(mv = %mv, "instant move"),
            None => self.done = true,
        }
        self.best = first;
        first
    }
}

impl<P: Position> Iterator for IterativeDeepening<P> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        if self.next_depth == 0 {
            return self.first_move();
        }

        while !self.done && self.next_depth <= self.max_depth {
            let depth = self.next_depth;
            match self.next_depth.checked_add(1) {
                Some(next) => self.next_depth = next,
                None => self.done = true,
            }

            let result = alphabeta_root(&self.position, depth, self.best);
            let found = result.best_move;
            debug!(
                depth,
                score = result.score,
                nodes = result.nodes,
                best = ?found.map(|mv| mv.to_string()),
                "depth complete"
            );
            self.last = Some(result);

            if let Some(mv) = found {
                self.best = Some(mv);
                return Some(mv);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use chesslab_core::{Board, Move, Position, Square};

    use super::IterativeDeepening;
    use crate::search::minimax::minimax;

    #[test]
    fn first_move_is_instant_and_legal() {
        let board = Board::starting_position();
        let mut driver = IterativeDeepening::new(board);
        let first = driver.next().unwrap();
        assert!(board.legal_moves().contains(&first));
        assert!(driver.last_result().is_none(), "first move must not search");
    }

    #[test]
    fn first_move_prefers_captures() {
        let board: Board = "4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1".parse().unwrap();
        let first = IterativeDeepening::new(board).next();
        assert_eq!(first, Some(Move::new(Square::D1, Square::D5)));
    }

    #[test]
    fn best_move_tracks_last_yield() {
        let board: Board = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap();
        let mut driver = IterativeDeepening::new(board).with_max_depth(2);
        assert_eq!(driver.best_move(), None);
        while let Some(mv) = driver.next() {
            assert_eq!(driver.best_move(), Some(mv));
        }
        assert_eq!(driver.best_move(), minimax(&board, 2).best_move);
    }

    #[test]
    fn no_legal_moves_yields_nothing() {
        let board: Board = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        let mut driver = IterativeDeepening::new(board);
        assert_eq!(driver.next(), None);
        assert_eq!(driver.next(), None);
    }

    #[test]
    fn each_depth_matches_minimax() {
        let board: Board = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1".parse().unwrap();
        let mut driver = IterativeDeepening::new(board).with_max_depth(3);
        driver.next();
        for depth in 1..=3 {
            let mv = driver.next();
            let result = driver.last_result().unwrap();
            assert_eq!(result.depth, depth);
            assert_eq!(mv, minimax(&board, depth).best_move, "depth {depth}");
        }
        assert_eq!(driver.next(), None, "max depth reached");
    }

    #[test]
    fn unbounded_iterator_keeps_going() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        let moves: Vec<Move> = IterativeDeepening::new(board).take(4).collect();
        assert_eq!(moves.len(), 4);
    }
}
