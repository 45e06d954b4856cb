use crate::board_state::chess_types::GridIndex;
use crate::moves::move_shared::move_delta;

/// Knights jump: any `(2, 1)` or `(1, 2)` offset, intervening squares ignored.
#[inline]
pub fn knight_move_is_valid(from: GridIndex, to: GridIndex) -> bool {
    let (dr, dc) = move_delta(from, to);
    matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
}
