use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_jump_moves;
use crate::moves::knight_moves::KNIGHT_OFFSETS;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Position,
    side: Color,
    out: &mut Vec<Position>,
) {
    push_jump_moves(game_state, from, side, &KNIGHT_OFFSETS, out);
}
