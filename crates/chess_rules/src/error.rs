//! Error taxonomy shared by every fallible operation in the crate.
//!
//! A returned error always means nothing was mutated: the board and phase
//! are exactly as they were before the call.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A coordinate outside the 8x8 board was requested.
    #[error("invalid coordinate: file {file}, rank {rank} (both must be within 1..=8)")]
    InvalidCoordinate { file: i32, rank: i32 },

    /// Square text such as "b2" that does not name a board square.
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),

    /// The move breaks movement, occupancy or turn-ownership rules.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The command is not accepted in the current phase.
    #[error("command `{command}` is not allowed while {phase}")]
    IllegalCommand { command: String, phase: String },

    #[error("invalid game snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("invalid export config: {0}")]
    InvalidConfig(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
