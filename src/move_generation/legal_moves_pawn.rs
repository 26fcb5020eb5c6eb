//! Pseudo-legal pawn destinations.
//!
//! Promotion is not branched here: a pawn reaching the last row is turned into
//! a queen when the move is applied.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_enemy_of;
use crate::moves::pawn_moves::pawn_capture_targets;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Position,
    side: Color,
    out: &mut Vec<Position>,
) {
    let dir = side.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if game_state.is_empty(one_step) {
            out.push(one_step);

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if game_state.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_capture_targets(side, from) {
        if is_enemy_of(game_state, to, side) {
            out.push(to);
        }
    }

    // The target square is always empty, so it never duplicates a capture.
    // Only the side to move may use it; the other side created it.
    if let Some(ep) = game_state
        .en_passant_target
        .filter(|_| side == game_state.side_to_move)
    {
        let adjacent = from.col().abs_diff(ep.col()) == 1;
        if from.offset(dir, 0).is_some_and(|ahead| ahead.row() == ep.row()) && adjacent {
            out.push(ep);
        }
    }
}
