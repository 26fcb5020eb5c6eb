//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with a seeded random
//! opening prefix. Games end on checkmate, stalemate or the ply cap; neither
//! repetition nor the fifty-move rule is tracked.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, info};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::apply;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
        )
    }
}

/// Play one seeded match. `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let (mut state, opening_moves_lan) = apply_seeded_random_opening(
        &GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state.clone(),
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(outcome) = terminal_outcome(&state) {
            result.outcome = outcome;
            break;
        }

        let mover = state.side_to_move;
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&state, &config.go_params)?,
            Color::Black => engine_black.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                result.white_move_count += 1;
                result.white_total_time_ns += elapsed_ns;
            }
            Color::Black => {
                result.black_move_count += 1;
                result.black_total_time_ns += elapsed_ns;
            }
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessError::Engine(format!("{mover} engine returned no move from a live position"))
        })?;
        if !all_legal_moves(&state).contains(&chosen) {
            return Err(ChessError::IllegalMove {
                from: chosen.from,
                to: chosen.to,
            });
        }

        result.played_moves_lan.push(move_to_long_algebraic(chosen));
        state = apply(&state, chosen);
    }

    // The ply cap can land exactly on a finished game.
    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(outcome) = terminal_outcome(&state) {
            result.outcome = outcome;
        }
    }

    debug!(
        seed,
        outcome = ?result.outcome,
        plies = result.played_moves_lan.len(),
        "match finished"
    );

    result.final_state = state;
    Ok(result)
}

/// Play a series and aggregate win/loss/draw statistics. Colours are drawn
/// per game from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves += p1_moves;
        stats.player1_total_time_ns += p1_ns;
        stats.player2_moves += p2_moves;
        stats.player2_total_time_ns += p2_ns;

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate => {
                let color = if result.outcome == MatchOutcome::WhiteWinCheckmate {
                    Color::White
                } else {
                    Color::Black
                };
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            game = i + 1,
            of = config.games,
            seed,
            player1_white = player1_is_white,
            result = ?mapped,
            "series game finished"
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    Ok(stats)
}

fn terminal_outcome(state: &GameState) -> Option<MatchOutcome> {
    match game_status(state) {
        GameStatus::Checkmate {
            winner: Color::White,
        } => Some(MatchOutcome::WhiteWinCheckmate),
        GameStatus::Checkmate {
            winner: Color::Black,
        } => Some(MatchOutcome::BlackWinCheckmate),
        GameStatus::Stalemate => Some(MatchOutcome::DrawStalemate),
        GameStatus::InProgress | GameStatus::Check => None,
    }
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / f64::from(moves) / 1_000_000.0
    }
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (GameState, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves_lan = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = rng.random_range(low..=high);

    for _ in 0..target_plies {
        let legal_moves = all_legal_moves(&state);
        let Some(&chosen) = legal_moves.choose(&mut rng) else {
            break;
        };
        opening_moves_lan.push(move_to_long_algebraic(chosen));
        state = apply(&state, chosen);
    }

    (state, opening_moves_lan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_minimax::{Difficulty, MinimaxEngine};
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn match_runs_random_vs_minimax() {
        let mut white = RandomEngine::seeded(1);
        let mut black = MinimaxEngine::new(Difficulty::Easy);
        let result = play_engine_match(
            &mut white,
            &mut black,
            42,
            &MatchConfig {
                max_plies: 40,
                opening_min_plies: 2,
                opening_max_plies: 6,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");

        assert!((2..=6).contains(&result.opening_moves_lan.len()));
        assert_eq!(
            (result.white_move_count + result.black_move_count) as usize,
            result.played_moves_lan.len()
        );
        if result.outcome == MatchOutcome::DrawMaxPlies {
            assert_eq!(result.played_moves_lan.len(), 40);
        }
    }

    #[test]
    fn same_seed_replays_same_opening() {
        let config = MatchConfig {
            max_plies: 4,
            ..MatchConfig::default()
        };
        let run = || {
            play_engine_match(
                &mut RandomEngine::seeded(3),
                &mut RandomEngine::seeded(4),
                99,
                &config,
            )
            .expect("match should run")
        };
        let first = run();
        let second = run();
        assert_eq!(first.opening_moves_lan, second.opening_moves_lan);
        assert_eq!(first.played_moves_lan, second.played_moves_lan);
        assert_eq!(first.final_state, second.final_state);
    }

    #[test]
    fn series_accounts_for_every_game() {
        let stats = play_engine_match_series(
            || Box::new(MinimaxEngine::new(Difficulty::Easy)),
            || Box::new(RandomEngine::seeded(5)),
            &MatchSeriesConfig {
                games: 3,
                base_seed: 777,
                per_game: MatchConfig {
                    max_plies: 16,
                    opening_min_plies: 2,
                    opening_max_plies: 4,
                    ..MatchConfig::default()
                },
            },
        )
        .expect("series should run");

        assert_eq!(stats.outcomes.len(), 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert!(stats.player1_avg_move_time_ms >= 0.0);
        assert!(stats.report().starts_with("games=3 "));
    }

    #[test]
    fn checkmated_start_is_scored_without_moves() {
        let mated = GameState::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("fixture FEN should parse");
        assert_eq!(terminal_outcome(&mated), Some(MatchOutcome::WhiteWinCheckmate));
        assert_eq!(terminal_outcome(&GameState::new_game()), None);
    }
}
