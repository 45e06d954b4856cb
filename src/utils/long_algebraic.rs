//! Long algebraic move strings (`e2e4`) as used by puzzle solutions.

use crate::utils::algebraic::algebraic_to_indices;

/// Split a 4-character move into its source and destination squares.
///
/// Returns `None` unless both halves are valid algebraic squares.
pub fn split_move(long_algebraic: &str) -> Option<(&str, &str)> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return None;
    }

    let (from, to) = long_algebraic.split_at(2);
    algebraic_to_indices(from)?;
    algebraic_to_indices(to)?;
    Some((from, to))
}

#[inline]
pub fn join_move(from: &str, to: &str) -> String {
    format!("{from}{to}")
}
