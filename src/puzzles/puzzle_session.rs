//! Puzzle session controller.
//!
//! Holds everything that changes while a user works through puzzles: the
//! active puzzle and its cursor, the current board snapshot, whose turn it
//! is, and the snapshots needed for undo. The move engine stays stateless;
//! this type only calls into it.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::board_state::board::Board;
use crate::board_state::chess_types::Color;
use crate::config::TrainerConfig;
use crate::errors::Errors;
use crate::moves::apply_move::apply_move;
use crate::moves::pseudo_legal::is_pseudo_legal;
use crate::puzzles::puzzle::Puzzle;
use crate::puzzles::puzzle_list::PuzzleList;
use crate::utils::long_algebraic::{join_move, split_move};

/// Result of one user move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not pseudo-legal for the side to move. Board unchanged.
    Illegal,
    /// Legal but not the solution move. Board unchanged.
    WrongMove { expected: String },
    /// Correct; the line continues. `reply` is the opponent move played
    /// automatically, if any.
    Correct { reply: Option<String> },
    /// Correct and the line is finished.
    Solved { reply: Option<String> },
    /// The puzzle was already finished before this attempt.
    AlreadySolved,
    /// The scripted reply could not be played from the current position.
    BrokenSolution { mv: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveRecord {
    pub puzzle_id: String,
    pub started_at: DateTime<Utc>,
    pub solved_at: DateTime<Utc>,
    pub mistakes: u32,
}

/// Board before a ply, and whether the session played it as the scripted reply.
#[derive(Debug, Clone, Copy)]
struct PlayedPly {
    before: Board,
    scripted: bool,
}

#[derive(Debug, Clone)]
pub struct PuzzleSession {
    puzzles: Vec<Puzzle>,
    current: usize,
    board: Board,
    side_to_move: Color,
    history: Vec<PlayedPly>,
    config: TrainerConfig,
    mistakes: u32,
    started_at: DateTime<Utc>,
    records: Vec<SolveRecord>,
}

impl PuzzleSession {
    /// Start a session on the first puzzle of `list`, shuffled when the
    /// config carries a seed.
    pub fn new(list: PuzzleList, config: TrainerConfig) -> Result<Self, Errors> {
        let list = match config.shuffle_seed {
            Some(seed) => list.shuffled(seed),
            None => list,
        };
        let puzzles = list.into_vec();
        if puzzles.is_empty() {
            return Err(Errors::EmptyPuzzleList);
        }

        let mut session = Self {
            puzzles,
            current: 0,
            board: Board::new_empty(),
            side_to_move: Color::Light,
            history: Vec::new(),
            config,
            mistakes: 0,
            started_at: Utc::now(),
            records: Vec::new(),
        };
        session.load_puzzle(0)?;
        Ok(session)
    }

    /// Make puzzle `index` active with its cursor back at zero.
    pub fn load_puzzle(&mut self, index: usize) -> Result<(), Errors> {
        let len = self.puzzles.len();
        let puzzle = self
            .puzzles
            .get_mut(index)
            .ok_or(Errors::PuzzleIndexOutOfRange { index, len })?;

        puzzle.reset();
        self.board = puzzle.starting_board();
        self.side_to_move = puzzle.first_mover();
        self.current = index;
        self.history.clear();
        self.mistakes = 0;
        self.started_at = Utc::now();

        info!(puzzle = %puzzle.id, index, side = %self.side_to_move, "puzzle loaded");
        Ok(())
    }

    pub fn reset_puzzle(&mut self) -> Result<(), Errors> {
        self.load_puzzle(self.current)
    }

    /// Advance to the next puzzle. Returns `false` at the end of the list.
    pub fn next_puzzle(&mut self) -> bool {
        let next = self.current + 1;
        next < self.puzzles.len() && self.load_puzzle(next).is_ok()
    }

    /// Go back one puzzle. Returns `false` at the start of the list.
    pub fn previous_puzzle(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(prev) => self.load_puzzle(prev).is_ok(),
            None => false,
        }
    }

    /// Validate and, when it matches the solution, play the user's move.
    pub fn attempt_move(&mut self, from: &str, to: &str) -> MoveOutcome {
        let Some(expected) = self.current_puzzle().expected_move().map(str::to_owned) else {
            return MoveOutcome::AlreadySolved;
        };

        if !is_pseudo_legal(&self.board, from, to, self.side_to_move) {
            debug!(from, to, side = %self.side_to_move, "rejected illegal move");
            return MoveOutcome::Illegal;
        }

        if join_move(from, to) != expected {
            self.mistakes += 1;
            debug!(from, to, expected = %expected, "move does not match solution");
            return MoveOutcome::WrongMove { expected };
        }

        self.play(from, to, false);
        if self.is_solved() {
            return MoveOutcome::Solved { reply: None };
        }
        if !self.config.auto_reply {
            return MoveOutcome::Correct { reply: None };
        }

        match self.play_opponent_reply() {
            Ok(reply) if self.is_solved() => MoveOutcome::Solved { reply },
            Ok(reply) => MoveOutcome::Correct { reply },
            Err(e) => {
                warn!(error = %e, "scripted reply failed");
                MoveOutcome::BrokenSolution {
                    mv: self
                        .current_puzzle()
                        .expected_move()
                        .unwrap_or_default()
                        .to_owned(),
                }
            }
        }
    }

    /// Play the next solution move for the side to move, if any remain.
    pub fn play_opponent_reply(&mut self) -> Result<Option<String>, Errors> {
        let Some(mv) = self.current_puzzle().expected_move().map(str::to_owned) else {
            return Ok(None);
        };

        let playable = split_move(&mv)
            .filter(|(from, to)| is_pseudo_legal(&self.board, from, to, self.side_to_move));
        let Some((from, to)) = playable else {
            return Err(Errors::InvalidSolutionMove {
                puzzle_id: self.current_puzzle().id.clone(),
                mv: mv.clone(),
                side: self.side_to_move.to_string(),
            });
        };

        self.play(from, to, true);
        debug!(mv = %mv, "played scripted reply");
        Ok(Some(mv))
    }

    /// Take back the last user move together with the scripted reply that
    /// followed it, so the user is on move again. A solve record for the
    /// line being reopened is dropped. Returns `false` when nothing was
    /// played.
    pub fn undo(&mut self) -> bool {
        let Some(last) = self.history.pop() else {
            return false;
        };

        let mut restored = last.before;
        let mut plies = 1;
        if last.scripted {
            if let Some(user_ply) = self.history.pop() {
                restored = user_ply.before;
                plies += 1;
            }
        }

        let was_solved = self.is_solved();
        self.board = restored;
        if plies % 2 == 1 {
            self.side_to_move = self.side_to_move.opposite();
        }

        let puzzle = &mut self.puzzles[self.current];
        puzzle.cursor = puzzle.cursor.saturating_sub(plies);

        if was_solved
            && self
                .records
                .last()
                .is_some_and(|record| record.puzzle_id == puzzle.id)
        {
            self.records.pop();
        }

        debug!(plies, cursor = puzzle.cursor, "undo");
        true
    }

    #[inline]
    pub fn hint(&self) -> Option<&str> {
        self.current_puzzle().expected_move()
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.current_puzzle().is_complete()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn current_puzzle(&self) -> &Puzzle {
        &self.puzzles[self.current]
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn puzzle_count(&self) -> usize {
        self.puzzles.len()
    }

    #[inline]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[inline]
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn records(&self) -> &[SolveRecord] {
        &self.records
    }

    fn play(&mut self, from: &str, to: &str, scripted: bool) {
        self.history.push(PlayedPly {
            before: self.board,
            scripted,
        });
        self.board = apply_move(&self.board, from, to);
        self.side_to_move = self.side_to_move.opposite();

        let puzzle = &mut self.puzzles[self.current];
        puzzle.cursor += 1;

        if puzzle.is_complete() {
            let record = SolveRecord {
                puzzle_id: puzzle.id.clone(),
                started_at: self.started_at,
                solved_at: Utc::now(),
                mistakes: self.mistakes,
            };
            info!(puzzle = %record.puzzle_id, mistakes = record.mistakes, "puzzle solved");
            self.records.push(record);
        }
    }
}
