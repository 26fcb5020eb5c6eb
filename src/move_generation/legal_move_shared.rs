use crate::game_state::{chess_types::*, game_state::GameState};

/// Whether `square` may be entered by a piece of `mover`: empty or enemy-held.
#[inline]
pub fn is_open_or_enemy(game_state: &GameState, square: Position, mover: Color) -> bool {
    game_state
        .piece_at(square)
        .map_or(true, |piece| piece.color != mover)
}

#[inline]
pub fn is_enemy_of(game_state: &GameState, square: Position, mover: Color) -> bool {
    game_state
        .piece_at(square)
        .is_some_and(|piece| piece.color != mover)
}

/// Ray-walk destinations for a slider: stop before friends, stop on enemies.
pub fn push_slider_moves(
    game_state: &GameState,
    from: Position,
    mover: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Position>,
) {
    for &dir in directions {
        for to in crate::moves::rays::ray(from, dir) {
            match game_state.piece_at(to) {
                None => out.push(to),
                Some(piece) => {
                    if piece.color != mover {
                        out.push(to);
                    }
                    break;
                }
            }
        }
    }
}

/// Single-jump destinations (knight, king steps) that are empty or enemy-held.
pub fn push_jump_moves(
    game_state: &GameState,
    from: Position,
    mover: Color,
    offsets: &'static [(i8, i8)],
    out: &mut Vec<Position>,
) {
    out.extend(
        crate::moves::rays::jumps(from, offsets)
            .filter(|&to| is_open_or_enemy(game_state, to, mover)),
    );
}
