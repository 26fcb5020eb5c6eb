//! Turn-by-turn game driver for interactive front ends.
//!
//! Owns the current position, enforces whose turn it is, and lets the
//! minimax engine answer in player-vs-computer games. Rendering and input are
//! left to the caller.

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_minimax::{Difficulty, MinimaxEngine};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    PlayerVsPlayer,
    PlayerVsComputer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Side the person plays in player-vs-computer games.
    pub human_side: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsPlayer,
            difficulty: Difficulty::Easy,
            human_side: Color::White,
        }
    }
}

/// What happened on one committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    pub mover: Color,
    pub piece: Piece,
    pub capture: bool,
    /// Status of the position after the move.
    pub status: GameStatus,
}

pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    status: GameStatus,
    engine: MinimaxEngine,
    history: Vec<Move>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_state(config, GameState::new_game())
    }

    /// Start from an arbitrary position, e.g. one loaded from FEN.
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        let status = game_status(&state);
        Self {
            config,
            state,
            status,
            engine: MinimaxEngine::new(config.difficulty),
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.config.mode == GameMode::PlayerVsComputer
            && self.state.side_to_move != self.config.human_side
    }

    /// Legal destinations for the piece on `position`, or nothing when the
    /// square is not selectable right now.
    pub fn select_square(&self, position: Position) -> Vec<Position> {
        if self.is_over() || self.is_computer_turn() {
            return Vec::new();
        }
        match self.state.piece_at(position) {
            Some(piece) if piece.color == self.state.side_to_move => {
                legal_moves(&self.state, position)
            }
            _ => Vec::new(),
        }
    }

    /// Play a move on behalf of a person.
    pub fn play_move(&mut self, from: Position, to: Position) -> ChessResult<MoveReport> {
        if self.is_over() {
            return Err(ChessError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(ChessError::NotYourTurn(self.config.human_side));
        }
        if !self.select_square(from).contains(&to) {
            return Err(ChessError::IllegalMove { from, to });
        }
        Ok(self.commit(Move::new(from, to)))
    }

    /// Let the engine move. `Ok(None)` when it is not the engine's turn or the
    /// game is over.
    pub fn play_computer_turn(&mut self) -> ChessResult<Option<MoveReport>> {
        if self.is_over() || !self.is_computer_turn() {
            return Ok(None);
        }

        let output = self.engine.choose_move(&self.state, &GoParams::default())?;
        let mv = output.best_move.ok_or_else(|| {
            ChessError::Engine("engine returned no move from a live position".to_owned())
        })?;
        if !legal_moves(&self.state, mv.from).contains(&mv.to) {
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        Ok(Some(self.commit(mv)))
    }

    /// "White wins!", "Black wins!" or "Stalemate!" once the game is over.
    pub fn result_text(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::Checkmate {
                winner: Color::White,
            } => Some("White wins!"),
            GameStatus::Checkmate {
                winner: Color::Black,
            } => Some("Black wins!"),
            GameStatus::Stalemate => Some("Stalemate!"),
            GameStatus::InProgress | GameStatus::Check => None,
        }
    }

    fn commit(&mut self, mv: Move) -> MoveReport {
        let Some(piece) = self.state.piece_at(mv.from) else {
            unreachable!("legal move {mv} starts on an empty square");
        };
        let en_passant = piece.kind == PieceKind::Pawn
            && self.state.en_passant_target == Some(mv.to)
            && self.state.is_empty(mv.to);
        let capture = self.state.piece_at(mv.to).is_some() || en_passant;

        self.state = apply_move(&self.state, mv.from, mv.to);
        self.status = game_status(&self.state);
        self.history.push(mv);

        info!(mv = %mv, mover = %piece.color, capture, status = ?self.status, "move played");
        if let Some(text) = self.result_text() {
            info!(plies = self.history.len(), result = text, "game over");
        }

        MoveReport {
            mv,
            mover: piece.color,
            piece,
            capture,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvp() -> GameSession {
        GameSession::new(SessionConfig::default())
    }

    fn pvc(human_side: Color) -> SessionConfig {
        SessionConfig {
            mode: GameMode::PlayerVsComputer,
            human_side,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn default_config_is_two_player_easy_white() {
        let config = SessionConfig::default();
        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.human_side, Color::White);
        assert!(!GameSession::new(config).is_computer_turn());
    }

    fn sq(name: &str) -> Position {
        crate::utils::algebraic::algebraic_to_position(name).expect("fixture square should parse")
    }

    #[test]
    fn selecting_own_pawn_lists_its_pushes() {
        let session = pvp();
        let targets = session.select_square(sq("e2"));
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&sq("e3")));
        assert!(targets.contains(&sq("e4")));

        assert!(session.select_square(sq("e7")).is_empty());
        assert!(session.select_square(sq("e4")).is_empty());
    }

    #[test]
    fn illegal_move_is_rejected_without_changing_state() {
        let mut session = pvp();
        let err = session
            .play_move(sq("e2"), sq("e5"))
            .expect_err("three-square pawn push is illegal");
        assert_eq!(
            err,
            ChessError::IllegalMove {
                from: sq("e2"),
                to: sq("e5")
            }
        );
        assert_eq!(session.state(), &GameState::new_game());
        assert!(session.move_history().is_empty());
    }

    #[test]
    fn capture_flag_is_reported() {
        let mut session = pvp();
        for (from, to) in [("e2", "e4"), ("d7", "d5")] {
            let report = session.play_move(sq(from), sq(to)).expect("opening move is legal");
            assert!(!report.capture);
        }
        let report = session.play_move(sq("e4"), sq("d5")).expect("exd5 is legal");
        assert!(report.capture);
        assert_eq!(report.piece, Piece::new(Color::White, PieceKind::Pawn));
        assert_eq!(session.move_history().len(), 3);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut session = pvp();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
            session.play_move(sq(from), sq(to)).expect("move is legal");
        }
        assert_eq!(
            session.status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert_eq!(session.result_text(), Some("Black wins!"));
        assert!(session.select_square(sq("a2")).is_empty());
        assert_eq!(
            session.play_move(sq("a2"), sq("a3")),
            Err(ChessError::GameOver)
        );
    }

    #[test]
    fn computer_answers_the_human_move() {
        let mut session = GameSession::new(pvc(Color::White));
        assert!(!session.is_computer_turn());
        assert_eq!(session.play_computer_turn(), Ok(None));

        session.play_move(sq("e2"), sq("e4")).expect("e2e4 is legal");
        assert!(session.is_computer_turn());
        assert!(session.select_square(sq("e7")).is_empty());
        assert_eq!(
            session.play_move(sq("e7"), sq("e5")),
            Err(ChessError::NotYourTurn(Color::White))
        );

        let report = session
            .play_computer_turn()
            .expect("engine should run")
            .expect("engine should move on its turn");
        assert_eq!(report.mover, Color::Black);
        assert_eq!(session.move_history().len(), 2);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn computer_opens_when_human_plays_black() {
        let mut session = GameSession::new(pvc(Color::Black));
        assert!(session.is_computer_turn());
        let report = session
            .play_computer_turn()
            .expect("engine should run")
            .expect("engine should move first");
        assert_eq!(report.mover, Color::White);
        assert_eq!(session.state().side_to_move, Color::Black);
    }

    #[test]
    fn loaded_stalemate_reports_result() {
        let state = GameState::from_fen("k7/2Q5/2K5/8/8/8/8/8 b - - 0 1")
            .expect("fixture FEN should parse");
        let session = GameSession::from_state(SessionConfig::default(), state);
        assert_eq!(session.status(), GameStatus::Stalemate);
        assert_eq!(session.result_text(), Some("Stalemate!"));
    }
}
