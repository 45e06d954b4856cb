//! Canonical chess-rule constants.
//!
//! Static literals used to set up and validate puzzle boards.

use crate::board_state::chess_types::Color;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const BOARD_SIZE: usize = 8;

/// Rank separator inside the piece-placement field.
pub const RANK_SEPARATOR: char = '/';

/// Grid row a pawn of `color` starts on (rank 2 for white, rank 7 for black).
#[inline]
pub const fn pawn_start_row(color: Color) -> usize {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}
