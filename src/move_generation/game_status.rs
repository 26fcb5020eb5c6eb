//! Terminal-state detection: checkmate and stalemate split "no legal moves"
//! by whether the side to move is in check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check but has a reply.
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

/// Whether the side to move is in check.
#[inline]
pub fn is_in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

pub fn is_checkmate(game_state: &GameState) -> bool {
    is_in_check(game_state) && !has_legal_move(game_state)
}

pub fn is_stalemate(game_state: &GameState) -> bool {
    !is_in_check(game_state) && !has_legal_move(game_state)
}

/// One check probe and one legal-move probe, for callers that want both flags.
pub fn game_status(game_state: &GameState) -> GameStatus {
    let in_check = is_in_check(game_state);
    match (in_check, has_legal_move(game_state)) {
        (true, false) => GameStatus::Checkmate {
            winner: game_state.side_to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}
