use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Position,
    side: Color,
    out: &mut Vec<Position>,
) {
    push_slider_moves(game_state, from, side, &BISHOP_DIRECTIONS, out);
}
