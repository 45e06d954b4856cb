//! Terminal-oriented Unicode board renderer.
//!
//! Maps piece codes to display glyphs and lays a board out with file and
//! rank labels, rank 8 on top.

use crate::board_state::board::Board;
use crate::board_state::chess_types::{Color, Piece, PieceKind};

/// Display glyph for a piece code, or `""` for anything that is not one of
/// the twelve codes (including no code at all).
pub fn piece_glyph(code: Option<char>) -> &'static str {
    match code.and_then(Piece::from_code) {
        Some(piece) => glyph_for_piece(piece),
        None => "",
    }
}

pub fn glyph_for_piece(piece: Piece) -> &'static str {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => "♙",
        (Color::Light, PieceKind::Knight) => "♘",
        (Color::Light, PieceKind::Bishop) => "♗",
        (Color::Light, PieceKind::Rook) => "♖",
        (Color::Light, PieceKind::Queen) => "♕",
        (Color::Light, PieceKind::King) => "♔",
        (Color::Dark, PieceKind::Pawn) => "♟",
        (Color::Dark, PieceKind::Knight) => "♞",
        (Color::Dark, PieceKind::Bishop) => "♝",
        (Color::Dark, PieceKind::Rook) => "♜",
        (Color::Dark, PieceKind::Queen) => "♛",
        (Color::Dark, PieceKind::King) => "♚",
    }
}

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for (row, cells) in board.rows().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(piece) => out.push_str(glyph_for_piece(*piece)),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
