//! Core chess types: board representation, move generation, and game rules.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
pub mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use movegen::{generate_legal_moves, generate_pseudo_legal};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use square::Square;
