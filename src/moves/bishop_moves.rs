use crate::board_state::board::Board;
use crate::board_state::chess_types::GridIndex;
use crate::moves::move_shared::{move_delta, path_is_clear};

/// Diagonal slide with nothing in between.
#[inline]
pub fn bishop_move_is_valid(board: &Board, from: GridIndex, to: GridIndex) -> bool {
    is_diagonal(from, to) && path_is_clear(board, from, to)
}

#[inline]
pub fn is_diagonal(from: GridIndex, to: GridIndex) -> bool {
    let (dr, dc) = move_delta(from, to);
    dr.abs() == dc.abs() && dr != 0
}
