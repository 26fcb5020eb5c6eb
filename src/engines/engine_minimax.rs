//! Difficulty-tiered minimax engine.
//!
//! Each tier is a fixed search depth; there is no iterative deepening and no
//! time control.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::MaterialScorer;
use crate::search::minimax::{search_with_scorer, SearchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Search depth in plies.
    #[inline]
    pub const fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(ChessError::InvalidOption {
                name: "difficulty".to_owned(),
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    difficulty: Difficulty,
}

impl MinimaxEngine {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        if name.eq_ignore_ascii_case("difficulty") {
            self.difficulty = value.parse()?;
            return Ok(());
        }
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let depth = params.depth.unwrap_or_else(|| self.difficulty.depth()).max(1);
        let result = search_with_scorer(&MaterialScorer, game_state, SearchConfig { depth });

        info!(
            difficulty = %self.difficulty,
            depth,
            score = result.best_score,
            nodes = result.nodes,
            "minimax engine chose move"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            info_lines: vec![format!(
                "minimax_engine depth {} score {} nodes {}",
                depth, result.best_score, result.nodes
            )],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Difficulty, MinimaxEngine};
    use crate::chess_errors::ChessError;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::{Move, Position};
    use crate::game_state::game_state::GameState;

    #[test]
    fn difficulty_tiers_map_to_depths() {
        assert_eq!(Difficulty::Easy.depth(), 1);
        assert_eq!(Difficulty::Medium.depth(), 2);
        assert_eq!(Difficulty::Hard.depth(), 3);
        assert_eq!("HARD".parse::<Difficulty>().expect("should parse"), Difficulty::Hard);
        assert_eq!(
            "brutal".parse::<Difficulty>(),
            Err(ChessError::InvalidOption {
                name: "difficulty".to_owned(),
                value: "brutal".to_owned(),
            })
        );
    }

    #[test]
    fn set_option_changes_difficulty() {
        let mut engine = MinimaxEngine::default();
        engine
            .set_option("Difficulty", "medium")
            .expect("difficulty option should be accepted");
        assert_eq!(engine.difficulty(), Difficulty::Medium);
        assert!(matches!(
            engine.set_option("Hash", "16"),
            Err(ChessError::InvalidOption { name, .. }) if name == "Hash"
        ));
    }

    #[test]
    fn engine_captures_free_queen() {
        let game = GameState::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1")
            .expect("fixture FEN should parse");
        let mut engine = MinimaxEngine::new(Difficulty::Easy);
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should run");
        assert_eq!(
            out.best_move,
            Some(Move::new(Position::new(7, 3), Position::new(3, 3)))
        );
        assert_eq!(out.info_lines.len(), 1);
    }

    #[test]
    fn zero_depth_override_still_moves() {
        let out = MinimaxEngine::default()
            .choose_move(&GameState::new_game(), &GoParams { depth: Some(0) })
            .expect("engine should run");
        assert!(out.best_move.is_some());
    }

    #[test]
    fn engine_returns_none_when_mated() {
        let game = GameState::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("fixture FEN should parse");
        let out = MinimaxEngine::new(Difficulty::Hard)
            .choose_move(&game, &GoParams::default())
            .expect("engine should run");
        assert_eq!(out.best_move, None);
    }
}
