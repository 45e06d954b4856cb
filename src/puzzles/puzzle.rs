//! Puzzle record: a starting position plus the forced line that solves it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::errors::Errors;
use crate::utils::fen_parser::{parse_position, parse_position_fields};
use crate::utils::long_algebraic::split_move;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub fen: String,
    /// Solution line, alternating sides, each move as `e2e4`.
    pub moves: Vec<String>,
    #[serde(default)]
    pub description: String,
    /// Side that plays the first solution move. Falls back to the FEN's
    /// side-to-move field, then to white.
    #[serde(default)]
    pub turn: Option<Color>,
    /// Number of solution moves already played.
    #[serde(skip)]
    pub cursor: usize,
}

impl Puzzle {
    pub fn new(id: &str, fen: &str, moves: &[&str], description: &str, turn: Color) -> Self {
        Self {
            id: id.to_owned(),
            fen: fen.to_owned(),
            moves: moves.iter().map(|m| (*m).to_owned()).collect(),
            description: description.to_owned(),
            turn: Some(turn),
            cursor: 0,
        }
    }

    #[inline]
    pub fn first_mover(&self) -> Color {
        self.turn
            .or_else(|| parse_position_fields(&self.fen).side_to_move)
            .unwrap_or(Color::Light)
    }

    #[inline]
    pub fn starting_board(&self) -> Board {
        parse_position(&self.fen)
    }

    /// Next solution move, or `None` once the line is finished.
    #[inline]
    pub fn expected_move(&self) -> Option<&str> {
        self.moves.get(self.cursor).map(String::as_str)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.moves.len()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Every solution move must name two valid squares.
    pub fn validate(&self) -> Result<(), Errors> {
        if let Some(bad) = self.moves.iter().find(|mv| split_move(mv).is_none()) {
            return Err(Errors::InvalidMoveString(format!("{bad} (puzzle {})", self.id)));
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Text(String),
    Number(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(text) => text,
        IdRepr::Number(number) => number.to_string(),
    })
}
