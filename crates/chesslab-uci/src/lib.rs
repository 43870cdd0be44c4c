//! UCI front end for the chesslab engine.

pub mod command;
pub mod engine;
pub mod error;
pub mod time;

pub use command::{Command, GoParams, UciOption, parse_command};
pub use engine::{EngineConfig, UciEngine};
pub use error::UciError;
pub use time::{compute_budget, move_budget};
