use crate::board_state::board::Board;
use crate::board_state::chess_types::GridIndex;
use crate::moves::bishop_moves::is_diagonal;
use crate::moves::move_shared::path_is_clear;
use crate::moves::rook_moves::is_straight;

/// Union of rook and bishop geometry.
#[inline]
pub fn queen_move_is_valid(board: &Board, from: GridIndex, to: GridIndex) -> bool {
    (is_straight(from, to) || is_diagonal(from, to)) && path_is_clear(board, from, to)
}
