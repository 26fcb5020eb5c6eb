//! Rule-level properties checked through the public API, including over
//! seeded random playouts.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use minimax_chess::game_state::chess_types::CastlingRights;
use minimax_chess::move_generation::legal_move_checks::is_king_in_check;
use minimax_chess::move_generation::legal_move_generator::all_legal_moves;
use minimax_chess::utils::algebraic::algebraic_to_position;
use minimax_chess::{
    apply_move, best_move, evaluate, is_checkmate, is_in_check, is_stalemate, legal_moves,
    new_game, Color, GameState, Piece, PieceKind, Position,
};

fn sq(name: &str) -> Position {
    algebraic_to_position(name).expect("fixture square should parse")
}

fn fen(text: &str) -> GameState {
    GameState::from_fen(text).expect("fixture FEN should parse")
}

#[test]
fn random_playouts_keep_rules_consistent() {
    for seed in 0..12u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = new_game();

        for _ in 0..80 {
            let moves = all_legal_moves(&state);
            let mated = is_checkmate(&state);
            let stalemated = is_stalemate(&state);

            assert!(!(mated && stalemated), "seed {seed}: mate and stalemate at once");
            assert_eq!(
                moves.is_empty(),
                mated || stalemated,
                "seed {seed}: empty move list must mean a finished game ({})",
                state.get_fen()
            );

            let mover = state.side_to_move;
            for mv in &moves {
                let next = apply_move(&state, mv.from, mv.to);
                assert!(
                    !is_king_in_check(&next, mover),
                    "seed {seed}: {mv} leaves the {mover} king attacked in {}",
                    state.get_fen()
                );
                assert_eq!(next.side_to_move, mover.opposite());
            }

            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            state = apply_move(&state, mv.from, mv.to);
        }
    }
}

#[test]
fn four_developing_moves_reach_expected_board() {
    let mut state = new_game();

    state = apply_move(&state, sq("e2"), sq("e4"));
    assert_eq!(state.en_passant_target, Some(sq("e3")));

    state = apply_move(&state, sq("e7"), sq("e5"));
    assert_eq!(state.en_passant_target, Some(sq("e6")));

    state = apply_move(&state, sq("g1"), sq("f3"));
    assert_eq!(state.en_passant_target, None);

    state = apply_move(&state, sq("b8"), sq("c6"));
    assert_eq!(state.en_passant_target, None);

    assert_eq!(
        state.get_fen(),
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 1"
    );
    assert_eq!(state.side_to_move, Color::White);
    assert_eq!(evaluate(&state), 0);
}

#[test]
fn single_step_pawn_push_clears_en_passant_target() {
    let state = apply_move(&new_game(), sq("d2"), sq("d4"));
    let state = apply_move(&state, sq("a7"), sq("a6"));
    assert_eq!(state.en_passant_target, None);
}

#[test]
fn white_castles_both_ways_when_path_is_clear() {
    let state = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let king_targets = legal_moves(&state, sq("e1"));
    assert!(king_targets.contains(&sq("g1")));
    assert!(king_targets.contains(&sq("c1")));

    let kingside = apply_move(&state, sq("e1"), sq("g1"));
    assert_eq!(
        kingside.piece_at(sq("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(kingside.piece_at(sq("h1")), None);
    assert!(!kingside.castling_rights.white_kingside);
    assert!(!kingside.castling_rights.white_queenside);
    assert!(kingside.castling_rights.black_kingside);
    assert!(kingside.castling_rights.black_queenside);

    let queenside = apply_move(&state, sq("e1"), sq("c1"));
    assert_eq!(
        queenside.piece_at(sq("d1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(queenside.piece_at(sq("a1")), None);
}

#[test]
fn black_castles_kingside() {
    let state = fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    assert!(legal_moves(&state, sq("e8")).contains(&sq("g8")));

    let next = apply_move(&state, sq("e8"), sq("g8"));
    assert_eq!(
        next.piece_at(sq("f8")),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
    assert_eq!(next.piece_at(sq("g8")), Some(Piece::new(Color::Black, PieceKind::King)));
    assert!(!next.castling_rights.black_kingside);
    assert!(!next.castling_rights.black_queenside);
    assert!(next.castling_rights.white_kingside);
}

#[test]
fn castling_refused_across_attacked_square_or_out_of_check() {
    // Black rook on f8 covers f1.
    let crossing = fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    let targets = legal_moves(&crossing, sq("e1"));
    assert!(!targets.contains(&sq("g1")));
    assert!(targets.contains(&sq("c1")));

    // Black rook on e8 checks the king.
    let in_check = fen("k3r3/8/8/8/8/8/8/R3K2R w KQ - 0 1");
    assert!(is_in_check(&in_check));
    let targets = legal_moves(&in_check, sq("e1"));
    assert!(!targets.contains(&sq("g1")));
    assert!(!targets.contains(&sq("c1")));
}

#[test]
fn rook_move_clears_only_its_side() {
    let state = fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let next = apply_move(&state, sq("h1"), sq("h5"));
    assert_eq!(
        next.castling_rights,
        CastlingRights {
            white_kingside: false,
            ..CastlingRights::ALL
        }
    );
}

#[test]
fn fools_mate_through_public_api() {
    let mut state = new_game();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        assert!(legal_moves(&state, sq(from)).contains(&sq(to)));
        state = apply_move(&state, sq(from), sq(to));
    }
    assert!(is_in_check(&state));
    assert!(is_checkmate(&state));
    assert_eq!(best_move(&state, 2), None);
}

#[test]
fn queen_to_h4_after_g3_is_not_check() {
    let mut state = new_game();
    for (from, to) in [("g2", "g3"), ("e7", "e5"), ("f2", "f3"), ("d8", "h4")] {
        state = apply_move(&state, sq(from), sq(to));
    }
    assert!(!is_in_check(&state));
    assert!(!is_checkmate(&state));
    assert!(best_move(&state, 1).is_some());
}

#[test]
fn promotion_makes_a_queen() {
    let state = fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
    let next = apply_move(&state, sq("a7"), sq("a8"));
    assert_eq!(next.piece_at(sq("a8")), Some(Piece::new(Color::White, PieceKind::Queen)));
}
