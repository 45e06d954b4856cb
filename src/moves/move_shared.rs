use crate::board_state::board::Board;
use crate::board_state::chess_types::GridIndex;

/// Signed `(dr, dc)` from `from` to `to`.
#[inline]
pub fn move_delta(from: GridIndex, to: GridIndex) -> (i32, i32) {
    (to.0 as i32 - from.0 as i32, to.1 as i32 - from.1 as i32)
}

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must lie on a shared rank, file or diagonal; the walk steps
/// by the sign of each delta.
pub fn path_is_clear(board: &Board, from: GridIndex, to: GridIndex) -> bool {
    let (dr, dc) = move_delta(from, to);
    let row_step = dr.signum();
    let col_step = dc.signum();

    let mut row = from.0 as i32 + row_step;
    let mut col = from.1 as i32 + col_step;

    while (row, col) != (to.0 as i32, to.1 as i32) {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return false;
        }
        if !board.is_empty_at((row as usize, col as usize)) {
            return false;
        }

        row += row_step;
        col += col_step;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{move_delta, path_is_clear};
    use crate::board_state::board::Board;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn delta_is_destination_minus_source() {
        assert_eq!(move_delta((6, 4), (4, 4)), (-2, 0));
        assert_eq!(move_delta((0, 1), (2, 2)), (2, 1));
    }

    #[test]
    fn blocker_between_squares_closes_path() {
        // White rook a1, black pawn a4.
        let board = parse_position("8/8/8/8/p7/8/8/R7 w - - 0 1");
        assert!(path_is_clear(&board, (7, 0), (5, 0)));
        assert!(path_is_clear(&board, (7, 0), (4, 0)));
        assert!(!path_is_clear(&board, (7, 0), (3, 0)));
    }

    #[test]
    fn adjacent_squares_have_clear_path() {
        let board = Board::new_game();
        assert!(path_is_clear(&board, (7, 0), (6, 0)));
        assert!(path_is_clear(&board, (7, 2), (6, 3)));
    }
}
