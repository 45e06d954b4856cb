use crate::board_state::board::Board;
use crate::board_state::chess_types::GridIndex;
use crate::moves::move_shared::{move_delta, path_is_clear};

/// Rank or file slide with nothing in between.
#[inline]
pub fn rook_move_is_valid(board: &Board, from: GridIndex, to: GridIndex) -> bool {
    is_straight(from, to) && path_is_clear(board, from, to)
}

#[inline]
pub fn is_straight(from: GridIndex, to: GridIndex) -> bool {
    let (dr, dc) = move_delta(from, to);
    (dr == 0) != (dc == 0)
}
