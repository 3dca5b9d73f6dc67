//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by message decoding,
//! move notation parsing and the protocol session. Decode variants name the
//! field of the state message that was rejected so a counterpart process can
//! be told exactly what it sent wrong.
//!
//! Usage guidelines:
//! - Functions that consume external text return `CheckersResult<T>`.
//! - Generation and move application never fail: they are pure functions of
//!   a state that was already validated. Misusing them (applying a move that
//!   was not generated for the state) is a programming error and panics.

use thiserror::Error;

use crate::game_state::checkers_rules::{CELL_COUNT, MOVES_UNTIL_DRAW};

/// Unified error type for the checkers engine.
#[derive(Debug, Error)]
pub enum CheckersError {
    /// The message did not split into exactly four whitespace-separated fields.
    #[error("state message must have 4 fields (board, move, next player, moves until draw), found {found}")]
    WrongFieldCount { found: usize },

    /// The board field is not one symbol per playable cell.
    #[error("board field must have {expected} symbols, found {found}", expected = CELL_COUNT)]
    WrongBoardLength { found: usize },

    /// A board symbol outside the message alphabet.
    #[error("board field: unrecognized symbol '{symbol}' at cell {cell}")]
    InvalidBoardSymbol { cell: usize, symbol: char },

    /// The move field could not be read as move notation.
    #[error("move field: {reason} in '{token}'")]
    InvalidMove { token: String, reason: String },

    /// The next-player field is not a single red or white symbol.
    #[error("next player field: unrecognized symbol '{token}'")]
    InvalidNextPlayer { token: String },

    /// The draw counter is not a number in range.
    #[error("moves until draw field: '{token}' is not a number in 0..={max}", max = MOVES_UNTIL_DRAW)]
    InvalidMovesUntilDraw { token: String },

    /// Re-encoding a decoded message produced different text.
    #[error("message did not round-trip: received '{received}', re-encoded as '{reencoded}'")]
    RoundTripMismatch { received: String, reencoded: String },

    /// A selection was requested for a state with no successors.
    #[error("no successor states are available for a finished game")]
    NoSuccessors,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CheckersResult<T> = Result<T, CheckersError>;

impl CheckersError {
    pub(crate) fn invalid_move(token: &str, reason: impl Into<String>) -> Self {
        CheckersError::InvalidMove {
            token: token.to_owned(),
            reason: reason.into(),
        }
    }
}
