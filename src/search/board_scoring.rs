//! Static evaluation.
//!
//! Scores are always from White's point of view: positive favours White.
//! The search maximises for White and minimises for Black.

use crate::game_state::chess_rules::CHECKMATE_SCORE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, GameStatus};

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Plain material count: pawn 1, minor pieces 3, rook 5, queen 9.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    #[inline]
    pub fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(_, piece)| match piece.color {
                Color::White => Self::piece_value(piece.kind),
                Color::Black => -Self::piece_value(piece.kind),
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    /// Checkmate dominates material; stalemate is level.
    fn score(&self, game_state: &GameState) -> i32 {
        match game_status(game_state) {
            GameStatus::Checkmate {
                winner: Color::White,
            } => CHECKMATE_SCORE,
            GameStatus::Checkmate {
                winner: Color::Black,
            } => -CHECKMATE_SCORE,
            GameStatus::Stalemate => 0,
            GameStatus::InProgress | GameStatus::Check => {
                Self::material_balance_white_minus_black(game_state)
            }
        }
    }
}

/// Evaluate with the default material scorer.
#[inline]
pub fn evaluate(game_state: &GameState) -> i32 {
    MaterialScorer.score(game_state)
}
