use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::push_jump_moves;
use crate::moves::king_moves::KING_OFFSETS;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Position,
    side: Color,
    out: &mut Vec<Position>,
) {
    push_jump_moves(game_state, from, side, &KING_OFFSETS, out);
    generate_castling_moves(game_state, from, side, out);
}

fn generate_castling_moves(
    game_state: &GameState,
    king_from: Position,
    side: Color,
    out: &mut Vec<Position>,
) {
    let row = side.back_rank();
    if king_from != Position::new(row, KING_HOME_COL) {
        return;
    }

    // Cannot castle out of check.
    if is_king_in_check(game_state, side) {
        return;
    }

    let enemy = side.opposite();
    for castle_side in [CastleSide::Kingside, CastleSide::Queenside] {
        if !game_state.castling_rights.has(side, castle_side) {
            continue;
        }

        let rook_col = castle_side.rook_home_col();
        let (low, high) = if rook_col > KING_HOME_COL {
            (KING_HOME_COL + 1, rook_col)
        } else {
            (rook_col + 1, KING_HOME_COL)
        };
        let path_clear = (low..high).all(|col| game_state.is_empty(Position::new(row, col)));
        if !path_clear {
            continue;
        }

        // The king crosses the rook's landing square and stops on its own.
        let crossing = Position::new(row, castle_side.rook_target_col());
        let landing = Position::new(row, castle_side.king_target_col());
        if is_square_attacked(game_state, crossing, enemy)
            || is_square_attacked(game_state, landing, enemy)
        {
            continue;
        }

        out.push(landing);
    }
}
