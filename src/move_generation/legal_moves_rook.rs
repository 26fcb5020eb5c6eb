//! Rook destinations: orthogonal rays, including the first enemy piece hit.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Position,
    side: Color,
    out: &mut Vec<Position>,
) {
    push_slider_moves(game_state, from, side, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Color, Position};
    use crate::game_state::game_state::GameState;

    #[test]
    fn rook_stops_before_friend_and_on_enemy() {
        // Rook d4, own pawn d2, enemy knight d6, open rank.
        let game = GameState::from_fen("4k3/8/3n4/8/3R4/8/3P4/4K3 w - - 0 1")
            .expect("fixture FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&game, Position::new(4, 3), Color::White, &mut out);

        assert!(out.contains(&Position::new(2, 3)), "captures d6");
        assert!(!out.contains(&Position::new(1, 3)), "does not pass d6");
        assert!(out.contains(&Position::new(5, 3)), "reaches d3");
        assert!(!out.contains(&Position::new(6, 3)), "does not take own pawn");
        assert_eq!(out.len(), 2 + 1 + 7);
    }
}
