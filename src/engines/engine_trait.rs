//! Engine abstraction for the session driver and the match harness.
//!
//! Defines common request parameters and output payloads so different move
//! pickers can be swapped at runtime behind a single trait object.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    /// `best_move` is `None` only when the position has no legal move.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams)
        -> ChessResult<EngineOutput>;
}
