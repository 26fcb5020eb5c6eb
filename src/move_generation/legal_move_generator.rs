//! Full legal move generation pipeline.
//!
//! Per-square pseudo-legal generation followed by a simulation filter: every
//! candidate is applied and rejected if it leaves the mover's king attacked.
//! Pins, discovered checks and check evasions all fall out of that one test.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        let mut out = Vec::with_capacity(48);
        for (from, piece) in game_state.pieces() {
            if piece.color != game_state.side_to_move {
                continue;
            }
            for to in pseudo_legal_moves(game_state, from) {
                let next = apply_move(game_state, from, to);
                if !is_king_in_check(&next, piece.color) {
                    out.push(GeneratedMove {
                        mv: Move::new(from, to),
                        game_after_move: next,
                    });
                }
            }
        }
        Ok(out)
    }
}

/// Destinations for the piece on `position`, ignoring self-check. The piece's
/// own color decides direction and friendliness. Empty square -> no moves.
pub fn pseudo_legal_moves(game_state: &GameState, position: Position) -> Vec<Position> {
    let Some(piece) = game_state.piece_at(position) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(16);
    let side = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, position, side, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, position, side, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, position, side, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, position, side, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, position, side, &mut out),
        PieceKind::King => generate_king_moves(game_state, position, side, &mut out),
    }
    out
}

/// Pseudo-legal destinations that do not leave the mover's king in check.
pub fn legal_moves(game_state: &GameState, position: Position) -> Vec<Position> {
    let Some(piece) = game_state.piece_at(position) else {
        return Vec::new();
    };

    pseudo_legal_moves(game_state, position)
        .into_iter()
        .filter(|&to| !is_king_in_check(&apply_move(game_state, position, to), piece.color))
        .collect()
}

/// Every legal move of the side to move, row-major by origin square, then in
/// destination generation order.
pub fn all_legal_moves(game_state: &GameState) -> Vec<Move> {
    game_state
        .pieces()
        .filter(|(_, piece)| piece.color == game_state.side_to_move)
        .flat_map(|(from, _)| {
            legal_moves(game_state, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Cheaper than `all_legal_moves(..).is_empty()`: stops at the first legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    game_state
        .pieces()
        .filter(|(_, piece)| piece.color == game_state.side_to_move)
        .any(|(from, piece)| {
            pseudo_legal_moves(game_state, from)
                .into_iter()
                .any(|to| !is_king_in_check(&apply_move(game_state, from, to), piece.color))
        })
}
