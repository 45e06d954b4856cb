use crate::board_state::chess_types::GridIndex;
use crate::moves::move_shared::move_delta;

/// One step in any direction. No castling.
#[inline]
pub fn king_move_is_valid(from: GridIndex, to: GridIndex) -> bool {
    let (dr, dc) = move_delta(from, to);
    dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0)
}
