use crate::chess_errors::ChessError;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

pub type MoveGenResult<T> = Result<T, MoveGenerationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveGenerationError {
    #[error("move generation is not implemented yet")]
    NotImplemented,
}

impl From<MoveGenerationError> for ChessError {
    fn from(err: MoveGenerationError) -> Self {
        ChessError::Engine(err.to_string())
    }
}

/// A legal move paired with the state it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}

pub struct NullMoveGenerator;

impl MoveGenerator for NullMoveGenerator {
    fn generate_legal_moves(&self, _game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        Err(MoveGenerationError::NotImplemented)
    }
}
