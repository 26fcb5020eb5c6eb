//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximises and Black minimises a White-relative score. Moves are
//! searched in generation order with no ordering heuristics, and the best move
//! only changes on strict improvement, so ties go to the earliest move.

use tracing::{debug, trace};

use crate::game_state::chess_rules::SEARCH_INFINITY;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::game_status;
use crate::move_generation::legal_move_apply::apply;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 2 }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub nodes: u64,
}

/// `(score, best move)` for `game_state`, searched `depth` plies deep within
/// the `(alpha, beta)` window. `maximizing` is true when White is to move.
pub fn search(
    game_state: &GameState,
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> (i32, Option<Move>) {
    let mut nodes = 0u64;
    alpha_beta(&MaterialScorer, game_state, depth, alpha, beta, maximizing, &mut nodes)
}

/// Best move for the side to move, or `None` when it has no legal move.
pub fn best_move(game_state: &GameState, depth: u8) -> Option<Move> {
    search_with_scorer(&MaterialScorer, game_state, SearchConfig { depth }).best_move
}

/// Root search over the full window, reporting the score and node count.
/// Searches at least one ply, so a live position always yields a move.
pub fn search_with_scorer<S: BoardScorer>(
    scorer: &S,
    game_state: &GameState,
    config: SearchConfig,
) -> SearchResult {
    let depth = config.depth.max(1);
    let maximizing = game_state.side_to_move == Color::White;
    let mut nodes = 0u64;
    let (best_score, best_move) = alpha_beta(
        scorer,
        game_state,
        depth,
        -SEARCH_INFINITY,
        SEARCH_INFINITY,
        maximizing,
        &mut nodes,
    );

    debug_assert!(
        best_move.is_some() || game_status(game_state).is_over(),
        "search returned no move from a position with legal moves"
    );

    debug!(
        depth,
        side = %game_state.side_to_move,
        score = best_score,
        nodes,
        best_move = ?best_move.map(|m| m.to_string()),
        "search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes,
    }
}

fn alpha_beta<S: BoardScorer>(
    scorer: &S,
    game_state: &GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if depth == 0 {
        return (scorer.score(game_state), None);
    }

    // An empty move list is exactly the checkmate/stalemate case.
    let moves = all_legal_moves(game_state);
    if moves.is_empty() {
        return (scorer.score(game_state), None);
    }

    let mut best_move = None;

    if maximizing {
        let mut best_score = -SEARCH_INFINITY;
        for mv in moves {
            let next = apply(game_state, mv);
            let (score, _) = alpha_beta(scorer, &next, depth - 1, alpha, beta, false, nodes);
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                trace!(depth, %mv, "beta cutoff");
                break;
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = SEARCH_INFINITY;
        for mv in moves {
            let next = apply(game_state, mv);
            let (score, _) = alpha_beta(scorer, &next, depth - 1, alpha, beta, true, nodes);
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(score);
            if beta <= alpha {
                trace!(depth, %mv, "alpha cutoff");
                break;
            }
        }
        (best_score, best_move)
    }
}
