//! Board transition for a move that has already been validated.

use tracing::warn;

use crate::board_state::board::Board;
use crate::errors::Errors;
use crate::utils::algebraic::algebraic_to_indices;

/// Move whatever stands on `from` to `to`, returning a new board.
///
/// The destination is overwritten, so captures need no special handling.
/// Legality is not re-checked. If either square fails to parse the input
/// board is returned unchanged; use [`try_apply_move`] to get an error
/// instead.
pub fn apply_move(board: &Board, from: &str, to: &str) -> Board {
    match try_apply_move(board, from, to) {
        Ok(next) => next,
        Err(Errors::InvalidAlgebraic(square)) => {
            warn!(from, to, square = %square, "invalid square; board unchanged");
            *board
        }
        Err(_) => move_piece_unchecked(board, from, to),
    }
}

/// Strict form of [`apply_move`]: invalid squares and an empty source are
/// errors.
pub fn try_apply_move(board: &Board, from: &str, to: &str) -> Result<Board, Errors> {
    let from_idx =
        algebraic_to_indices(from).ok_or_else(|| Errors::InvalidAlgebraic(from.to_owned()))?;
    let to_idx = algebraic_to_indices(to).ok_or_else(|| Errors::InvalidAlgebraic(to.to_owned()))?;

    let piece = board
        .piece_at(from_idx)
        .ok_or_else(|| Errors::TryingToMoveNonExistantPiece(from.to_owned()))?;

    Ok(board
        .with_piece(from_idx, None)
        .with_piece(to_idx, Some(piece)))
}

// Both squares parsed but the source is empty: copy the empty cell across.
fn move_piece_unchecked(board: &Board, from: &str, to: &str) -> Board {
    match (algebraic_to_indices(from), algebraic_to_indices(to)) {
        (Some(from_idx), Some(to_idx)) => board
            .with_piece(to_idx, board.piece_at(from_idx))
            .with_piece(from_idx, None),
        _ => *board,
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, try_apply_move};
    use crate::board_state::board::Board;
    use crate::board_state::chess_types::{Color, Piece, PieceKind};
    use crate::errors::Errors;
    use crate::utils::algebraic::algebraic_to_indices;
    use crate::utils::fen_parser::parse_position;

    fn at(board: &Board, square: &str) -> Option<Piece> {
        board.piece_at(algebraic_to_indices(square).expect("test square should parse"))
    }

    #[test]
    fn apply_leaves_original_board_unchanged() {
        let before = Board::new_game();
        let snapshot = before;
        let after = apply_move(&before, "e2", "e4");

        assert_eq!(at(&after, "e2"), None);
        assert_eq!(at(&after, "e4"), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(at(&before, "e2"), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(at(&before, "e4"), None);
        assert_eq!(before, snapshot);
        assert_ne!(before, after);
    }

    #[test]
    fn capture_overwrites_destination() {
        let board = parse_position("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1");
        let after = apply_move(&board, "e4", "d5");

        assert_eq!(at(&after, "d5"), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(at(&after, "e4"), None);
        assert_eq!(after.occupied_count(), board.occupied_count() - 1);
    }

    #[test]
    fn only_source_and_destination_change() {
        let board = Board::new_game();
        let after = apply_move(&board, "g1", "f3");

        let changed = (0..8)
            .flat_map(|row| (0..8).map(move |col| (row, col)))
            .filter(|idx| board.piece_at(*idx) != after.piece_at(*idx))
            .count();
        assert_eq!(changed, 2);
    }

    #[test]
    fn invalid_squares_echo_the_board() {
        let board = Board::new_game();
        assert_eq!(apply_move(&board, "e2", "e9"), board);
        assert_eq!(apply_move(&board, "zz", "e4"), board);
    }

    #[test]
    fn strict_apply_reports_bad_input() {
        let board = Board::new_game();
        assert!(matches!(
            try_apply_move(&board, "e2", "e9"),
            Err(Errors::InvalidAlgebraic(square)) if square == "e9"
        ));
        assert!(matches!(
            try_apply_move(&board, "e4", "e5"),
            Err(Errors::TryingToMoveNonExistantPiece(square)) if square == "e4"
        ));
        assert!(try_apply_move(&board, "e2", "e4").is_ok());
    }

    #[test]
    fn lenient_apply_from_empty_square_clears_destination() {
        let board = parse_position("4k3/8/8/8/4p3/8/8/4K3 w - - 0 1");
        let after = apply_move(&board, "d4", "e4");
        assert_eq!(at(&after, "e4"), None);
    }
}
