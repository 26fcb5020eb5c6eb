//! Errors used by the outer layers of the engine.
//!
//! The rules core (move generation, application, terminal detection and
//! search) never fails: its inputs come from its own output. `ChessError`
//! covers the layers that accept outside input instead, namely FEN and
//! algebraic text parsing, the interactive session, and engine drivers.
//!
//! Usage guidelines:
//! - Parsing and input variants are recoverable and suitable for showing to
//!   a user.
//! - `InvalidOption` reports configuration text that names no known setting.
//! - `Engine` carries failures from pluggable engines and move generators.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square name such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// A move such as `e2e4` could not be parsed.
    #[error("invalid long algebraic move: {0:?}")]
    InvalidMoveText(String),

    /// A FEN string was structurally malformed.
    #[error("invalid FEN {field}: {detail}")]
    InvalidFen { field: &'static str, detail: String },

    /// The requested move is not among the legal moves of the position.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    /// The mover does not control the side to move.
    #[error("it is not {0}'s turn")]
    NotYourTurn(Color),

    /// A move was requested after checkmate or stalemate.
    #[error("the game is already over")]
    GameOver,

    /// An engine or session option name or value was not recognised.
    #[error("invalid option {name}: {value:?}")]
    InvalidOption { name: String, value: String },

    /// An engine or move generator could not produce a result.
    #[error("engine failure: {0}")]
    Engine(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
