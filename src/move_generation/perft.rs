//! Perft: exhaustive legal-move tree counts, the correctness oracle for move
//! generation. Leaf moves are classified by comparing the states on either
//! side of the move, since moves carry no flags.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, LegalMoveGenerator};
use crate::move_generation::move_generator::{GeneratedMove, MoveGenResult, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> MoveGenResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

/// Perft with the built-in legal move generator.
#[inline]
pub fn perft_legal(game_state: &GameState, depth: u8) -> MoveGenResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> MoveGenResult<()> {
    let moves = generator.generate_legal_moves(game_state)?;

    if depth == 1 {
        for mv in &moves {
            count_leaf(game_state, mv, counts);
        }
        return Ok(());
    }

    for mv in &moves {
        perft_recurse(generator, &mv.game_after_move, depth - 1, counts)?;
    }

    Ok(())
}

fn count_leaf(parent: &GameState, generated: &GeneratedMove, counts: &mut PerftCounts) {
    let Move { from, to } = generated.mv;
    let child = &generated.game_after_move;
    counts.nodes += 1;

    let Some(moving) = parent.piece_at(from) else {
        return;
    };

    let is_en_passant =
        moving.kind == PieceKind::Pawn && parent.en_passant_target == Some(to) && parent.is_empty(to);
    if parent.piece_at(to).is_some() || is_en_passant {
        counts.captures += 1;
    }
    if is_en_passant {
        counts.en_passant += 1;
    }
    if moving.kind == PieceKind::King && from.col().abs_diff(to.col()) == 2 {
        counts.castles += 1;
    }
    if moving.kind == PieceKind::Pawn && to.row() == moving.color.promotion_row() {
        counts.promotions += 1;
    }
    if is_king_in_check(child, child.side_to_move) {
        counts.checks += 1;
        if !has_legal_move(child) {
            counts.checkmates += 1;
        }
    }
}
