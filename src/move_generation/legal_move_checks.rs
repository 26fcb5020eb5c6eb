//! Attack and check detection.
//!
//! Every probe is a bounded walk outward from the target square: pawn capture
//! sources, knight jumps, adjacent king squares, then the eight rays.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::rays::{jumps, ray};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Position> {
    let king = Piece::new(color, PieceKind::King);
    Position::all().find(|&pos| game_state.piece_at(pos) == Some(king))
}

/// A missing king counts as not in check.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = king_square(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

pub fn is_square_attacked(game_state: &GameState, square: Position, attacker_color: Color) -> bool {
    let holds = |pos: Position, kind: PieceKind| {
        game_state.piece_at(pos) == Some(Piece::new(attacker_color, kind))
    };

    if pawn_attack_sources(attacker_color, square).any(|pos| holds(pos, PieceKind::Pawn)) {
        return true;
    }

    if jumps(square, &KNIGHT_OFFSETS).any(|pos| holds(pos, PieceKind::Knight)) {
        return true;
    }

    if jumps(square, &KING_OFFSETS).any(|pos| holds(pos, PieceKind::King)) {
        return true;
    }

    let slider_hit = |directions: &[(i8, i8)], kinds: [PieceKind; 2]| {
        directions.iter().any(|&dir| {
            ray(square, dir)
                .find_map(|pos| game_state.piece_at(pos))
                .is_some_and(|piece| piece.color == attacker_color && kinds.contains(&piece.kind))
        })
    };

    slider_hit(&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen])
        || slider_hit(&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen])
}
