//! Errors from reading FEN and from board validation.

/// Why a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// `rank_index` counts from the top of the placement field (0 is rank 8).
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    /// Neither `-` nor a square on the third or sixth rank.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    /// Well-formed text describing an impossible position.
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
}

/// Structural problems found by [`Board::validate`](crate::board::Board::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount { color: &'static str, count: u32 },

    #[error("pawns found on back rank")]
    PawnsOnBackRank,

    /// The side that just moved left its king attacked.
    #[error("side not to move is in check")]
    OpponentInCheck,
}
