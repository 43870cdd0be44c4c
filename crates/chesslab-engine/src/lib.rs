//! Search and evaluation for chesslab.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use eval::score::{CHECK_BONUS, INF, MATE_SCORE, Score};
pub use search::iterative::IterativeDeepening;
pub use search::{
    DEFAULT_ALPHABETA_DEPTH, DEFAULT_MINIMAX_DEPTH, SearchMetrics, SearchResult, choose_alphabeta_move,
    choose_minimax_move, choose_move, choose_random_move,
};
