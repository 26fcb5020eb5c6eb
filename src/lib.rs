//! Crate root module declarations for the minimax chess engine.
//!
//! Exposes the rules core (game state, move generation, terminal detection),
//! the alpha-beta search, pluggable engines, the interactive game session and
//! text utilities, so the terminal binary, tests and benchmarks can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::chess_types::{Color, Move, Piece, PieceKind, Position};
pub use game_state::game_state::GameState;
pub use move_generation::game_status::{is_checkmate, is_in_check, is_stalemate, GameStatus};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_generator::legal_moves;
pub use search::board_scoring::evaluate;
pub use search::minimax::{best_move, search};

/// Standard starting position, White to move.
#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}
