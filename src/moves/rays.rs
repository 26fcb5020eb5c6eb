//! Bounded ray walks shared by sliding-piece generation and attack detection.

use crate::game_state::chess_types::Position;

/// Squares from `from` (exclusive) stepping by `(d_row, d_col)` to the board
/// edge. Callers stop at the first occupied square themselves.
#[inline]
pub fn ray(from: Position, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = Position> {
    std::iter::successors(from.offset(d_row, d_col), move |pos| pos.offset(d_row, d_col))
}

/// Squares reached by applying each offset once, dropping those off the board.
#[inline]
pub fn jumps(from: Position, offsets: &'static [(i8, i8)]) -> impl Iterator<Item = Position> {
    offsets
        .iter()
        .filter_map(move |&(d_row, d_col)| from.offset(d_row, d_col))
}
