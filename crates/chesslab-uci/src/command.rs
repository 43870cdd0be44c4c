//! UCI command parsing.

use std::time::Duration;

use chesslab_core::{Board, Move, Position};

use crate::error::UciError;

/// Largest accepted `MaxDepth`.
pub const MAX_DEPTH_LIMIT: u8 = 128;

/// Largest accepted `MoveTime`, in milliseconds (one hour).
pub const MAX_MOVE_TIME_MS: u64 = 3_600_000;

/// Parameters for the `go` command.
///
/// All fields are optional; a bare `go` uses defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    /// White's remaining time.
    pub wtime: Option<Duration>,
    /// Black's remaining time.
    pub btime: Option<Duration>,
    /// White's increment per move.
    pub winc: Option<Duration>,
    /// Black's increment per move.
    pub binc: Option<Duration>,
    /// Moves until next time control.
    pub movestogo: Option<u32>,
    /// Search to this depth only.
    pub depth: Option<u8>,
    /// Search for exactly this duration.
    pub movetime: Option<Duration>,
    /// Search until `stop` (no time limit).
    pub infinite: bool,
}

/// An engine option set through `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UciOption {
    /// Deepest iteration a search may reach.
    MaxDepth(u8),
    /// Budget for a `go` without clock parameters.
    MoveTime(Duration),
}

/// A parsed UCI command.
#[derive(Debug)]
pub enum Command {
    /// `uci` -- identify the engine.
    Uci,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `ucinewgame` -- reset engine state.
    UciNewGame,
    /// `position` -- set up a board position with optional moves applied.
    Position(Board),
    /// `go` -- start searching with given parameters.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(UciOption),
    /// `stop` -- halt the current search.
    Stop,
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of UCI input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, UciError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match head {
        "uci" => Ok(Command::Uci),
        "isready" => Ok(Command::IsReady),
        "ucinewgame" => Ok(Command::UciNewGame),
        "stop" => Ok(Command::Stop),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "go" => parse_go(args),
        "setoption" => parse_setoption(args),
        _ => Ok(Command::Unknown(head.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
///
/// Every listed move must be legal in the position it is played from.
fn parse_position(tokens: &[&str]) -> Result<Command, UciError> {
    let (mut board, rest) = match tokens.first() {
        Some(&"startpos") => (Board::starting_position(), &tokens[1..]),
        Some(&"fen") => {
            if tokens.len() < 7 {
                return Err(UciError::TruncatedFen {
                    fen: tokens[1..].join(" "),
                });
            }
            let fen = tokens[1..7].join(" ");
            let board: Board = fen
                .parse()
                .map_err(|source| UciError::InvalidFen { fen: fen.clone(), source })?;
            (board, &tokens[7..])
        }
        _ => return Err(UciError::MalformedPosition),
    };

    if let Some((&"moves", moves)) = rest.split_first() {
        for text in moves {
            let mv = Move::from_uci(text)
                .filter(|mv| board.legal_moves().contains(mv))
                .ok_or_else(|| UciError::InvalidMove {
                    uci_move: text.to_string(),
                })?;
            board.make(mv);
        }
    }

    Ok(Command::Position(board))
}

/// Parse the `go` command arguments.
///
/// Supports: wtime, btime, winc, binc, movestogo, depth, movetime and
/// infinite. Unknown tokens are silently skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, UciError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        let value = tokens.get(i + 1);
        match tokens[i] {
            "wtime" => params.wtime = Some(parse_millis(value, "wtime")?),
            "btime" => params.btime = Some(parse_millis(value, "btime")?),
            "winc" => params.winc = Some(parse_millis(value, "winc")?),
            "binc" => params.binc = Some(parse_millis(value, "binc")?),
            "movestogo" => params.movestogo = Some(parse_int(value, "movestogo")?),
            "depth" => params.depth = Some(parse_int(value, "depth")?),
            "movetime" => params.movetime = Some(parse_millis(value, "movetime")?),
            "infinite" => {
                params.infinite = true;
                i += 1;
                continue;
            }
            _ => {
                i += 1;
                continue;
            }
        }
        i += 2;
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`.
///
/// Option names are matched case-insensitively, as GUIs vary in how they echo them.
fn parse_setoption(tokens: &[&str]) -> Result<Command, UciError> {
    let (Some(&"name"), Some(value_at)) = (
        tokens.first(),
        tokens.iter().position(|&t| t == "value"),
    ) else {
        return Err(UciError::MalformedSetOption);
    };
    let name = tokens[1..value_at].join(" ");
    let value = tokens[value_at + 1..].join(" ");
    if name.is_empty() || value.is_empty() {
        return Err(UciError::MalformedSetOption);
    }

    let invalid = || UciError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };
    let option = match name.to_ascii_lowercase().as_str() {
        "maxdepth" => {
            let depth: u8 = value.parse().map_err(|_| invalid())?;
            if !(1..=MAX_DEPTH_LIMIT).contains(&depth) {
                return Err(invalid());
            }
            UciOption::MaxDepth(depth)
        }
        "movetime" => {
            let ms: u64 = value.parse().map_err(|_| invalid())?;
            if !(1..=MAX_MOVE_TIME_MS).contains(&ms) {
                return Err(invalid());
            }
            UciOption::MoveTime(Duration::from_millis(ms))
        }
        _ => return Err(UciError::UnknownOption { name }),
    };
    Ok(Command::SetOption(option))
}

/// Parse a millisecond value from a token.
fn parse_millis(token: Option<&&str>, param: &str) -> Result<Duration, UciError> {
    parse_int(token, param).map(Duration::from_millis)
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, UciError> {
    let value = token.ok_or_else(|| UciError::MissingGoValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| UciError::InvalidGoValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
