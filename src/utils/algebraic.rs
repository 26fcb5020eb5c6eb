//! Square name conversions (`e4` <-> `Position`).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert a square name such as `e4` to a board position.
#[inline]
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let invalid = || ChessError::InvalidAlgebraicSquare(square.to_owned());

    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok(Position::new(b'8' - rank, file - b'a'))
}

#[inline]
pub fn position_to_algebraic(position: Position) -> String {
    position.to_string()
}
