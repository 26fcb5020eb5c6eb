//! Pure state transition: `(GameState, from, to) -> GameState`.
//!
//! The same function serves committed moves, the legality filter and every
//! node of the search tree. Special moves are recognised from the moving piece
//! and its displacement, never from flags on the move.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Apply a move without validating it.
///
/// Callers pass moves produced by the move generator; the legality filter also
/// passes pseudo-legal moves and only inspects the result for self-check.
/// Panics if `from` is empty.
pub fn apply_move(game_state: &GameState, from: Position, to: Position) -> GameState {
    let moving = game_state
        .piece_at(from)
        .unwrap_or_else(|| panic!("apply_move called with empty origin square {from}"));
    let mover = moving.color;

    let mut next = game_state.clone();

    // En passant removes the pawn beside the origin, not on the target.
    if moving.kind == PieceKind::Pawn && game_state.en_passant_target == Some(to) {
        next.set_piece(Position::new(from.row(), to.col()), None);
    }

    if moving.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        let castle_side = if to.col() > from.col() {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        move_rook(&mut next, from.row(), castle_side);
    }

    next.set_piece(to, Some(moving));
    next.set_piece(from, None);

    if moving.kind == PieceKind::Pawn && to.row() == mover.promotion_row() {
        next.set_piece(to, Some(Piece::new(mover, PieceKind::Queen)));
    }

    next.en_passant_target =
        if moving.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
            Some(Position::new((from.row() + to.row()) / 2, from.col()))
        } else {
            None
        };

    update_castling_rights(&mut next, moving, from, to);

    next.last_move = Some(Move::new(from, to));
    next.side_to_move = mover.opposite();

    next
}

#[inline]
pub fn apply(game_state: &GameState, mv: Move) -> GameState {
    apply_move(game_state, mv.from, mv.to)
}

fn move_rook(game_state: &mut GameState, row: u8, castle_side: CastleSide) {
    let rook_from = Position::new(row, castle_side.rook_home_col());
    let rook_to = Position::new(row, castle_side.rook_target_col());
    let rook = game_state.piece_at(rook_from);
    game_state.set_piece(rook_to, rook);
    game_state.set_piece(rook_from, None);
}

fn update_castling_rights(game_state: &mut GameState, moving: Piece, from: Position, to: Position) {
    if moving.kind == PieceKind::King {
        game_state.castling_rights.revoke_all(moving.color);
    }

    if moving.kind == PieceKind::Rook {
        if let Some(side) = rook_corner(moving.color, from) {
            game_state.castling_rights.revoke(moving.color, side);
        }
    }

    // A capture on a rook corner removes the defender's right as well.
    let defender = moving.color.opposite();
    if let Some(side) = rook_corner(defender, to) {
        game_state.castling_rights.revoke(defender, side);
    }
}

fn rook_corner(color: Color, square: Position) -> Option<CastleSide> {
    if square.row() != color.back_rank() {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.rook_home_col() == square.col())
}
