//! FEN-to-GameState parser.
//!
//! Reads the four positional fields (board, side, castling, en passant). The
//! halfmove and fullmove clocks may follow and are ignored, since neither the
//! fifty-move rule nor move numbering is tracked.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_position;

fn invalid(field: &'static str, detail: impl Into<String>) -> ChessError {
    ChessError::InvalidFen {
        field,
        detail: detail.into(),
    }
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("board", "missing"))?;
    let side_part = parts.next().ok_or_else(|| invalid("side to move", "missing"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| invalid("castling rights", "missing"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| invalid("en passant square", "missing"))?;

    for (field, value) in ["halfmove clock", "fullmove number"].into_iter().zip(&mut parts) {
        value
            .parse::<u32>()
            .map_err(|_| invalid(field, format!("not a number: {value}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("trailer", "extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    drop_unbacked_castling_rights(&mut game_state);
    game_state.en_passant_target =
        parse_en_passant_square(en_passant_part, game_state.side_to_move)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("board", "must contain 8 ranks"));
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid("board", format!("bad empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid("board", format!("bad piece character '{ch}'")))?;

            if col >= 8 {
                return Err(invalid("board", format!("rank {} has too many files", 8 - row)));
            }

            game_state.set_piece(Position::new(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board", format!("rank {} does not sum to 8 files", 8 - row)));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid("side to move", side_part)),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let mut rights = CastlingRights::NONE;
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(invalid("castling rights", format!("bad character '{ch}'"))),
        }
    }

    Ok(rights)
}

/// A right is only kept while its king and rook still stand on their home
/// squares.
fn drop_unbacked_castling_rights(game_state: &mut GameState) {
    for color in [Color::White, Color::Black] {
        let row = color.back_rank();
        let king_home = game_state.piece_at(Position::new(row, KING_HOME_COL))
            == Some(Piece::new(color, PieceKind::King));

        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let rook_home = game_state.piece_at(Position::new(row, side.rook_home_col()))
                == Some(Piece::new(color, PieceKind::Rook));
            if !(king_home && rook_home) {
                game_state.castling_rights.revoke(color, side);
            }
        }
    }
}

/// The skipped-over square lies behind the pawn that just double-stepped,
/// so it is on rank 6 with White to move and rank 3 with Black to move.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> ChessResult<Option<Position>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_position(en_passant_part)
        .map_err(|_| invalid("en passant square", en_passant_part))?;
    let expected_row = side_to_move.opposite().pawn_start_row() as i8
        + side_to_move.opposite().pawn_direction();
    if square.row() as i8 != expected_row {
        return Err(invalid(
            "en passant square",
            format!("{en_passant_part} is not behind a {} pawn", side_to_move.opposite()),
        ));
    }
    Ok(Some(square))
}
