//! Position-description parser.
//!
//! Builds a [`Board`] from the piece-placement field of a FEN-style string.
//! The parse is permissive: it never fails, it fills what it can and drops
//! the rest. Callers that load untrusted text should validate separately.

use crate::board_state::board::Board;
use crate::board_state::chess_rules::{BOARD_SIZE, RANK_SEPARATOR};
use crate::board_state::chess_types::{Color, GridIndex, Piece};
use crate::utils::algebraic::algebraic_to_indices;

/// Trailing fields of a position description. The move engine ignores them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionFields {
    pub side_to_move: Option<Color>,
    pub castling_rights: Option<String>,
    pub en_passant_square: Option<GridIndex>,
    pub halfmove_clock: Option<u16>,
    pub fullmove_number: Option<u16>,
}

/// Parse the piece placement of `description` into a board.
///
/// The placement is everything before the first space, so a description
/// with a leading space has an empty placement.
///
/// Ranks are read top to bottom into rows 0..7. Digits skip that many
/// columns, piece codes fill one column. Characters past column 8, ranks past
/// the eighth, and unknown characters (which still take up a column) are
/// ignored.
pub fn parse_position(description: &str) -> Board {
    let placement = description.split(' ').next().unwrap_or("");
    let mut board = Board::new_empty();

    for (row, rank_str) in placement.split(RANK_SEPARATOR).take(BOARD_SIZE).enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if col >= BOARD_SIZE {
                break;
            }

            if let Some(empty_count) = ch.to_digit(10) {
                col += empty_count as usize;
                continue;
            }

            if let Some(piece) = Piece::from_code(ch) {
                board = board.with_piece((row, col), Some(piece));
            }
            col += 1;
        }
    }

    board
}

/// Parse the fields after the piece placement. Missing or malformed fields
/// come back as `None`.
pub fn parse_position_fields(description: &str) -> PositionFields {
    let mut parts = description.split_whitespace().skip(1);

    let side_to_move = parts.next().and_then(|s| match s {
        "w" => Some(Color::Light),
        "b" => Some(Color::Dark),
        _ => None,
    });
    let castling_rights = parts.next().filter(|s| *s != "-").map(str::to_owned);
    let en_passant_square = parts.next().and_then(algebraic_to_indices);
    let halfmove_clock = parts.next().and_then(|s| s.parse::<u16>().ok());
    let fullmove_number = parts.next().and_then(|s| s.parse::<u16>().ok());

    PositionFields {
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_position, parse_position_fields};
    use crate::board_state::chess_rules::STARTING_POSITION_FEN;
    use crate::board_state::chess_types::{Color, Piece, PieceKind};
    use crate::utils::render_board::render_board;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let board = parse_position(STARTING_POSITION_FEN);

        println!("\n{}", render_board(&board));

        assert_eq!(board.piece_at((0, 0)), Some(Piece::new(Color::Dark, PieceKind::Rook)));
        assert_eq!(board.piece_at((0, 4)), Some(Piece::new(Color::Dark, PieceKind::King)));
        assert_eq!(board.piece_at((6, 0)), Some(Piece::new(Color::Light, PieceKind::Pawn)));
        assert_eq!(board.piece_at((7, 4)), Some(Piece::new(Color::Light, PieceKind::King)));
        assert!((0..8).all(|col| board.is_empty_at((4, col))));
    }

    #[test]
    fn digits_skip_columns() {
        let board = parse_position("8/8/8/3k4/8/8/8/4K2R w K - 0 1");
        assert_eq!(board.piece_at((3, 3)), Some(Piece::new(Color::Dark, PieceKind::King)));
        assert_eq!(board.piece_at((7, 4)), Some(Piece::new(Color::Light, PieceKind::King)));
        assert_eq!(board.piece_at((7, 7)), Some(Piece::new(Color::Light, PieceKind::Rook)));
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn overflowing_ranks_are_truncated() {
        let board = parse_position("RNBQKBNRPP/8/8/8/8/8/8/8");
        assert_eq!(board.occupied_count(), 8);
        assert_eq!(board.piece_at((0, 7)), Some(Piece::new(Color::Light, PieceKind::Rook)));

        let board = parse_position("7pp/8/8/8/8/8/8/8");
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn malformed_input_never_fails() {
        assert_eq!(parse_position("").occupied_count(), 0);
        assert_eq!(parse_position("garbage").occupied_count(), 2);

        let short = parse_position("k7/8");
        assert_eq!(short.occupied_count(), 1);

        let unknown = parse_position("x6K/8/8/8/8/8/8/8");
        assert_eq!(unknown.piece_at((0, 0)), None);
        assert_eq!(unknown.piece_at((0, 7)), Some(Piece::new(Color::Light, PieceKind::King)));
    }

    #[test]
    fn placement_ends_at_first_space() {
        assert_eq!(parse_position(" 4k3/8/8/8/8/8/8/4K3 w - - 0 1").occupied_count(), 0);
        assert_eq!(parse_position("4k3/8/8/8/8/8/8/4K3").occupied_count(), 2);
    }

    #[test]
    fn trailing_fields_parse_permissively() {
        let fields = parse_position_fields(STARTING_POSITION_FEN);
        assert_eq!(fields.side_to_move, Some(Color::Light));
        assert_eq!(fields.castling_rights.as_deref(), Some("KQkq"));
        assert_eq!(fields.en_passant_square, None);
        assert_eq!(fields.halfmove_clock, Some(0));
        assert_eq!(fields.fullmove_number, Some(1));

        let fields = parse_position_fields("8/8/8/8/8/8/8/8 b - e3 x");
        assert_eq!(fields.side_to_move, Some(Color::Dark));
        assert_eq!(fields.castling_rights, None);
        assert_eq!(fields.en_passant_square, Some((5, 4)));
        assert_eq!(fields.halfmove_clock, None);

        assert_eq!(parse_position_fields("8/8/8/8/8/8/8/8"), Default::default());
    }
}
