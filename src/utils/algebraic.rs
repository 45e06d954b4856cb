//! Conversions between algebraic square names and grid indices.
//!
//! Row 0 is rank 8 and col 0 is file `a`. Anything outside the 64 valid
//! squares maps to `None`.

use crate::board_state::chess_rules::BOARD_SIZE;
use crate::board_state::chess_types::GridIndex;

/// Convert an algebraic square (for example: "e4") to `(row, col)`.
#[inline]
pub fn algebraic_to_indices(square: &str) -> Option<GridIndex> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return None;
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }

    let col = usize::from(file - b'a');
    let row = BOARD_SIZE - usize::from(rank - b'0');
    Some((row, col))
}

/// Convert `(row, col)` to an algebraic square (for example: "e4").
#[inline]
pub fn indices_to_algebraic(row: i32, col: i32) -> Option<String> {
    if !(0..8).contains(&row) || !(0..8).contains(&col) {
        return None;
    }

    let file_char = char::from(b'a' + col as u8);
    let rank_char = char::from(b'8' - row as u8);
    Some(format!("{file_char}{rank_char}"))
}

/// Same as [`indices_to_algebraic`] for an already-valid grid index.
#[inline]
pub fn index_to_algebraic((row, col): GridIndex) -> Option<String> {
    let row = i32::try_from(row).ok()?;
    let col = i32::try_from(col).ok()?;
    indices_to_algebraic(row, col)
}
