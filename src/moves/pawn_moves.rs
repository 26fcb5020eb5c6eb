//! Pawn geometry. Pawns are the only pieces whose movement depends on color.

use crate::game_state::chess_types::{Color, Position};

/// Column deltas of the two diagonal capture squares.
pub const PAWN_CAPTURE_COLS: [i8; 2] = [-1, 1];

/// Squares a pawn of `color` standing on `from` attacks.
#[inline]
pub fn pawn_capture_targets(color: Color, from: Position) -> impl Iterator<Item = Position> {
    let dir = color.pawn_direction();
    PAWN_CAPTURE_COLS
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}

/// Squares from which a pawn of `color` would attack `target`.
#[inline]
pub fn pawn_attack_sources(color: Color, target: Position) -> impl Iterator<Item = Position> {
    let dir = color.pawn_direction();
    PAWN_CAPTURE_COLS
        .into_iter()
        .filter_map(move |d_col| target.offset(-dir, d_col))
}
