//! Board state value type.
//!
//! `GameState` is a plain value: every applied move produces a fresh state and
//! the previous one is left untouched, so search branches never alias.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

pub type Board = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Indexed `[row][col]`, row 0 being Black's back rank.
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Position>,
    /// Highlighting only; the rules never read it.
    pub last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            last_move: None,
        }
    }
}

impl GameState {
    /// Empty board, White to move, no rights. Used to build fixtures.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.board[position.row() as usize][position.col() as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) {
        self.board[position.row() as usize][position.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Every occupied square with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| self.piece_at(pos).map(|piece| (pos, piece)))
    }
}
