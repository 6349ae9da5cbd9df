//! Errors used throughout the rules engine.
//!
//! `MoveError` is the single error type returned by [`GameState::play_move`]
//! and covers the five rejection kinds of the move protocol. Every variant is
//! a terminal rejection of one submitted move: the game state is left exactly
//! as it was before the call.
//!
//! Usage guidelines:
//! - `Parse`, `NoPieceAvailable` and `Ambiguous` describe the notation text and
//!   carry the offending token so shells can echo it back.
//! - `Illegal` carries an [`IllegalReason`] naming the rule gate that failed.
//! - `PromiseMismatch` means the move itself was legal but its `+`/`#` suffix
//!   over-claimed the result.
//!
//! `FenError` is only produced while setting up a position from FEN.
//!
//! [`GameState::play_move`]: crate::game_state::game_state::GameState::play_move

use thiserror::Error;

use crate::game_state::chess_types::MoveStatus;

/// Rejection of a single submitted move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Text does not match the algebraic notation grammar.
    #[error("cannot parse move '{0}'")]
    Parse(String),

    /// No piece of the stated kind, side and disambiguation reaches the target.
    #[error("no piece can play '{0}'")]
    NoPieceAvailable(String),

    /// More than one piece matches after applying the disambiguation.
    #[error("move '{0}' is ambiguous")]
    Ambiguous(String),

    /// A unique piece was found but a rule gate rejected the move.
    #[error("illegal move: {0}")]
    Illegal(IllegalReason),

    /// The move is legal but the check or mate suffix does not hold.
    #[error("move claims {claimed} but results in {actual}")]
    PromiseMismatch {
        claimed: MoveStatus,
        actual: MoveStatus,
    },
}

impl MoveError {
    /// Numeric protocol code: -1 parse, -2 ambiguous, -3 no piece available,
    /// -4 illegal, -5 promise mismatch.
    pub const fn code(&self) -> i8 {
        match self {
            MoveError::Parse(_) => -1,
            MoveError::Ambiguous(_) => -2,
            MoveError::NoPieceAvailable(_) => -3,
            MoveError::Illegal(_) => -4,
            MoveError::PromiseMismatch { .. } => -5,
        }
    }
}

impl From<IllegalReason> for MoveError {
    fn from(reason: IllegalReason) -> Self {
        MoveError::Illegal(reason)
    }
}

/// Rule gate that rejected an otherwise resolvable move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalReason {
    #[error("castling right already revoked")]
    CastlingRightRevoked,
    #[error("pieces stand between king and rook")]
    CastlingPathBlocked,
    #[error("cannot castle out of check")]
    CastlingOutOfCheck,
    #[error("king would pass through an attacked square")]
    CastlingThroughCheck,
    #[error("only pawns promote")]
    PromotionNotPawn,
    #[error("promotion only happens on the last rank")]
    PromotionWrongRank,
    #[error("pawn reaching the last rank must name a promotion piece")]
    PromotionRequired,
    #[error("pawns promote to a queen, rook, bishop or knight")]
    InvalidPromotionPiece,
    #[error("capture marked but nothing was captured")]
    CaptureMarkerWithoutCapture,
    #[error("capture made without the capture marker")]
    CaptureWithoutMarker,
    #[error("move leaves own king in check")]
    KingLeftInCheck,
}

/// Failure to set up a position from Forsyth-Edwards Notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing FEN field: {0}")]
    MissingField(&'static str),
    #[error("FEN has extra trailing fields")]
    TrailingFields,
    #[error("board layout must contain 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} does not describe exactly 8 files")]
    FileCount { rank: usize },
    #[error("invalid piece character '{0}'")]
    InvalidPiece(char),
    #[error("invalid side to move '{0}'")]
    InvalidSide(String),
    #[error("invalid castling field '{0}'")]
    InvalidCastling(String),
    #[error("invalid en-passant square '{0}'")]
    InvalidEnPassant(String),
    #[error("invalid move counter '{0}'")]
    InvalidCounter(String),
    #[error("{0} king count must be exactly one")]
    KingCount(&'static str),
    #[error("{0} king is in check with the other side to move")]
    OpponentInCheck(&'static str),
}
