//! Pseudo-legal move validation.
//!
//! Checks piece geometry, board occupancy and turn ownership only. Whether
//! the mover's king is left in check is not examined.

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, PieceKind};
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::king_move_is_valid;
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::pawn_move_is_valid;
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;
use crate::utils::algebraic::{algebraic_to_indices, index_to_algebraic};

/// Whether `side_to_move` may move the piece on `from` to `to`.
///
/// Short-circuits in order: both squares valid, source occupied, source
/// owned by `side_to_move`, destination not friendly, then piece geometry.
pub fn is_pseudo_legal(board: &Board, from: &str, to: &str, side_to_move: Color) -> bool {
    let (Some(from_idx), Some(to_idx)) = (algebraic_to_indices(from), algebraic_to_indices(to))
    else {
        return false;
    };

    let Some(piece) = board.piece_at(from_idx) else {
        return false;
    };

    if piece.color != side_to_move {
        return false;
    }

    if matches!(board.piece_at(to_idx), Some(target) if target.color == piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_valid(board, from_idx, to_idx, piece.color),
        PieceKind::Knight => knight_move_is_valid(from_idx, to_idx),
        PieceKind::Bishop => bishop_move_is_valid(board, from_idx, to_idx),
        PieceKind::Rook => rook_move_is_valid(board, from_idx, to_idx),
        PieceKind::Queen => queen_move_is_valid(board, from_idx, to_idx),
        PieceKind::King => king_move_is_valid(from_idx, to_idx),
    }
}

/// Every destination reachable from `from` for `side_to_move`, in row-major
/// order (a8 first).
pub fn pseudo_legal_destinations(board: &Board, from: &str, side_to_move: Color) -> Vec<String> {
    if algebraic_to_indices(from).is_none() {
        return Vec::new();
    }

    (0..8)
        .flat_map(|row| (0..8).map(move |col| (row, col)))
        .filter_map(index_to_algebraic)
        .filter(|to| is_pseudo_legal(board, from, to, side_to_move))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_pseudo_legal, pseudo_legal_destinations};
    use crate::board_state::board::Board;
    use crate::board_state::chess_types::Color;
    use crate::moves::apply_move::apply_move;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn invalid_squares_are_rejected() {
        let board = Board::new_game();
        assert!(!is_pseudo_legal(&board, "e2", "e9", Color::Light));
        assert!(!is_pseudo_legal(&board, "z2", "e4", Color::Light));
        assert!(!is_pseudo_legal(&board, "", "", Color::Light));
    }

    #[test]
    fn empty_source_is_rejected() {
        let board = Board::new_game();
        assert!(!is_pseudo_legal(&board, "e4", "e5", Color::Light));
    }

    #[test]
    fn turn_ownership_is_enforced() {
        let board = Board::new_game();
        assert!(!is_pseudo_legal(&board, "e7", "e5", Color::Light));
        assert!(!is_pseudo_legal(&board, "e2", "e4", Color::Dark));
        assert!(is_pseudo_legal(&board, "e7", "e5", Color::Dark));
        assert!(is_pseudo_legal(&board, "g1", "f3", Color::Light));
        assert!(!is_pseudo_legal(&board, "g8", "f6", Color::Light));
    }

    #[test]
    fn self_capture_is_rejected() {
        let board = Board::new_game();
        assert!(!is_pseudo_legal(&board, "a1", "a2", Color::Light));
        assert!(!is_pseudo_legal(&board, "g1", "e2", Color::Light));
        assert!(!is_pseudo_legal(&board, "e1", "d1", Color::Light));
    }

    #[test]
    fn start_position_pawn_rules() {
        let board = Board::new_game();
        assert!(is_pseudo_legal(&board, "a2", "a3", Color::Light));
        assert!(is_pseudo_legal(&board, "a2", "a4", Color::Light));
        assert!(!is_pseudo_legal(&board, "a2", "a5", Color::Light));

        let advanced = apply_move(&board, "a2", "a3");
        assert!(!is_pseudo_legal(&advanced, "a3", "a5", Color::Light));
        assert!(is_pseudo_legal(&advanced, "a3", "a4", Color::Light));
    }

    #[test]
    fn double_push_requires_empty_destination() {
        // Black knight on e4 sits on the double-push target.
        let board = parse_position("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1");
        assert!(!is_pseudo_legal(&board, "e2", "e4", Color::Light));
        assert!(is_pseudo_legal(&board, "e2", "e3", Color::Light));
    }

    #[test]
    fn pawn_captures_enemy_diagonally_only() {
        let board = parse_position("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1");
        assert!(is_pseudo_legal(&board, "e4", "d5", Color::Light));
        // f5 holds a friendly pawn.
        assert!(!is_pseudo_legal(&board, "e4", "f5", Color::Light));
        assert!(!is_pseudo_legal(&board, "e4", "f3", Color::Light));
    }

    #[test]
    fn sliders_capture_first_enemy_but_never_pass_it() {
        // White rook a1, black knight a5, black pawn a7, white bishop c1 behind a white pawn d2.
        let board = parse_position("4k3/p7/8/n7/8/8/3P4/R1B1K3 w - - 0 1");
        assert!(is_pseudo_legal(&board, "a1", "a4", Color::Light));
        assert!(is_pseudo_legal(&board, "a1", "a5", Color::Light));
        assert!(!is_pseudo_legal(&board, "a1", "a6", Color::Light));
        assert!(!is_pseudo_legal(&board, "a1", "a7", Color::Light));
        assert!(!is_pseudo_legal(&board, "c1", "e3", Color::Light));
        assert!(!is_pseudo_legal(&board, "c1", "d2", Color::Light));
        assert!(is_pseudo_legal(&board, "c1", "b2", Color::Light));
    }

    #[test]
    fn queen_capture_along_diagonal() {
        let board = parse_position("4k3/8/8/8/8/2b5/8/Q3K3 w - - 0 1");
        assert!(is_pseudo_legal(&board, "a1", "c3", Color::Light));
        assert!(!is_pseudo_legal(&board, "a1", "d4", Color::Light));
        assert!(is_pseudo_legal(&board, "a1", "d1", Color::Light));
        assert!(!is_pseudo_legal(&board, "a1", "f1", Color::Light));
    }

    #[test]
    fn king_may_step_into_attacked_square() {
        // Pseudo-legal only: the rook on d8 covers d1 but the move is still accepted.
        let board = parse_position("3rk3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert!(is_pseudo_legal(&board, "e1", "d1", Color::Light));
        assert!(!is_pseudo_legal(&board, "e1", "c1", Color::Light));
    }

    #[test]
    fn start_position_destinations() {
        let board = Board::new_game();
        assert_eq!(
            pseudo_legal_destinations(&board, "g1", Color::Light),
            vec!["f3".to_owned(), "h3".to_owned()]
        );
        assert_eq!(
            pseudo_legal_destinations(&board, "e2", Color::Light),
            vec!["e4".to_owned(), "e3".to_owned()]
        );
        assert!(pseudo_legal_destinations(&board, "d1", Color::Light).is_empty());
        assert!(pseudo_legal_destinations(&board, "x1", Color::Light).is_empty());
    }
}
