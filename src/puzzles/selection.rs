//! Two-click move input: pick a piece, then pick where it goes.

use crate::puzzles::puzzle_session::{MoveOutcome, PuzzleSession};
use crate::utils::algebraic::algebraic_to_indices;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    PieceSelected(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing to do: empty or enemy square with nothing selected, or a
    /// square that does not exist.
    Ignored,
    Selected(String),
    Deselected,
    Moved(MoveOutcome),
}

impl Selection {
    pub fn click(self, session: &mut PuzzleSession, square: &str) -> (Selection, ClickOutcome) {
        let Some(index) = algebraic_to_indices(square) else {
            return (self, ClickOutcome::Ignored);
        };

        let own_piece = session
            .board()
            .piece_at(index)
            .is_some_and(|piece| piece.color == session.side_to_move());

        match self {
            Selection::Idle if own_piece => select(square),
            Selection::Idle => (Selection::Idle, ClickOutcome::Ignored),
            Selection::PieceSelected(from) if from == square => {
                (Selection::Idle, ClickOutcome::Deselected)
            }
            Selection::PieceSelected(_) if own_piece => select(square),
            Selection::PieceSelected(from) => {
                let outcome = session.attempt_move(&from, square);
                (Selection::Idle, ClickOutcome::Moved(outcome))
            }
        }
    }

    pub fn selected_square(&self) -> Option<&str> {
        match self {
            Selection::Idle => None,
            Selection::PieceSelected(square) => Some(square),
        }
    }
}

fn select(square: &str) -> (Selection, ClickOutcome) {
    (
        Selection::PieceSelected(square.to_owned()),
        ClickOutcome::Selected(square.to_owned()),
    )
}
