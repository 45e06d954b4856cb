//! Board-to-placement serializer, the inverse of [`parse_position`] for
//! well-formed boards.
//!
//! [`parse_position`]: crate::utils::fen_parser::parse_position

use crate::board_state::board::Board;
use crate::board_state::chess_rules::RANK_SEPARATOR;
use crate::board_state::chess_types::Color;

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;

        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.code());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push(RANK_SEPARATOR);
        }
    }

    out
}

/// Placement plus a side-to-move field, with no castling/en-passant rights.
pub fn generate_fen(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    format!("{} {side} - - 0 1", generate_placement(board))
}
