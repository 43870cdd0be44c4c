//! UCI protocol errors.

use chesslab_core::FenError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it failed.
        source: FenError,
    },

    /// The `fen` keyword was not followed by six fields.
    #[error("truncated FEN: \"{fen}\"")]
    TruncatedFen {
        /// Whatever followed the `fen` keyword.
        fen: String,
    },

    /// A move in the `position` command is unparseable or illegal in its position.
    #[error("invalid move: {uci_move}")]
    InvalidMove {
        /// The UCI move string that was rejected.
        uci_move: String,
    },

    /// A `go` parameter was given without a value.
    #[error("missing value for go parameter {param}")]
    MissingGoValue {
        /// The parameter name.
        param: String,
    },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value for go parameter {param}: {value}")]
    InvalidGoValue {
        /// The parameter name.
        param: String,
        /// The value that failed to parse.
        value: String,
    },

    /// `setoption` without `name ... value ...`.
    #[error("malformed setoption command")]
    MalformedSetOption,

    /// `setoption` for an option this engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `setoption` with a value outside the option's type or range.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
