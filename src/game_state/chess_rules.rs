//! Canonical chess-rule constants.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column both kings start on.
pub const KING_HOME_COL: u8 = 4;

/// Score of a position where White has delivered mate; negated for Black.
pub const CHECKMATE_SCORE: i32 = 10_000;

/// Window bound used as "infinity" by the search.
pub const SEARCH_INFINITY: i32 = 99_999;
