//! Immutable 8x8 board snapshot.
//!
//! `Board` is a plain `Copy` value. Nothing in the crate mutates a board that
//! a caller already holds: every move builds a new snapshot, so keeping old
//! snapshots around is all a caller needs for history or undo.

use crate::board_state::chess_rules::{BOARD_SIZE, STARTING_POSITION_FEN};
use crate::board_state::chess_types::{GridIndex, Piece};
use crate::utils::fen_parser::parse_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_position(STARTING_POSITION_FEN)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Self {
        parse_position(fen)
    }

    #[inline]
    pub fn piece_at(&self, (row, col): GridIndex) -> Option<Piece> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    #[inline]
    pub fn is_empty_at(&self, index: GridIndex) -> bool {
        self.piece_at(index).is_none()
    }

    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Builder-style placement returning a new snapshot.
    ///
    /// Out-of-range indices leave the board unchanged.
    #[must_use]
    pub fn with_piece(&self, (row, col): GridIndex, piece: Option<Piece>) -> Self {
        let mut next = *self;
        if row < BOARD_SIZE && col < BOARD_SIZE {
            next.cells[row][col] = piece;
        }
        next
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}
