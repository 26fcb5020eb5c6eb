//! Coordinate move text (`e2e4`, `e7e8q`) <-> `Move`.
//!
//! Promotion is always to a queen, so a trailing promotion letter is accepted
//! only when it is `q`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::utils::algebraic::algebraic_to_position;

pub fn long_algebraic_to_move(text: &str) -> ChessResult<Move> {
    let text = text.trim();
    let invalid = || ChessError::InvalidMoveText(text.to_owned());

    if !text.is_ascii() {
        return Err(invalid());
    }

    match text.len() {
        4 => {}
        5 if text[4..].eq_ignore_ascii_case("q") => {}
        _ => return Err(invalid()),
    }

    let from = algebraic_to_position(&text[0..2]).map_err(|_| invalid())?;
    let to = algebraic_to_position(&text[2..4]).map_err(|_| invalid())?;
    Ok(Move::new(from, to))
}

#[inline]
pub fn move_to_long_algebraic(mv: Move) -> String {
    mv.to_string()
}
