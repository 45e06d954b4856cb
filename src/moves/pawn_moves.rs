use crate::board_state::board::Board;
use crate::board_state::chess_rules::pawn_start_row;
use crate::board_state::chess_types::{Color, GridIndex};
use crate::moves::move_shared::move_delta;

/// Pawn geometry: single push, double push from the start row, diagonal
/// capture onto an occupied square. No en-passant, no promotion.
pub fn pawn_move_is_valid(board: &Board, from: GridIndex, to: GridIndex, color: Color) -> bool {
    let (dr, dc) = move_delta(from, to);
    let forward = color.forward();

    if dc == 0 {
        if !board.is_empty_at(to) {
            return false;
        }
        if dr == forward {
            return true;
        }
        if dr == 2 * forward && from.0 == pawn_start_row(color) {
            let between = ((from.0 as i32 + forward) as usize, from.1);
            return board.is_empty_at(between);
        }
        return false;
    }

    dc.abs() == 1 && dr == forward && !board.is_empty_at(to)
}
