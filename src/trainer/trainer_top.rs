//! Terminal front-end and command loop.
//!
//! Reads one command per line, routes it to the puzzle session, and prints
//! the board and user-facing messages.

use std::io::{self, BufRead, Write};

use crate::puzzles::puzzle_session::{MoveOutcome, PuzzleSession};
use crate::puzzles::selection::{ClickOutcome, Selection};
use crate::utils::fen_generator::generate_fen;
use crate::utils::long_algebraic::split_move;
use crate::utils::render_board::render_board;

const HELP_TEXT: &str = "commands: <move e.g. e2e4> | click <sq> | undo | hint | reset | next | \
                         prev | board | fen | help | quit";

pub fn run_stdio_loop(session: PuzzleSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut trainer = TrainerState::new(session);

    trainer.show_puzzle(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = trainer.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct TrainerState {
    session: PuzzleSession,
    selection: Selection,
}

impl TrainerState {
    pub fn new(session: PuzzleSession) -> Self {
        Self {
            session,
            selection: Selection::Idle,
        }
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "quit" | "exit" => {
                writeln!(out, "solved {} puzzle(s)", self.session.records().len())?;
                return Ok(true);
            }
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "board" => writeln!(out, "{}", render_board(self.session.board()))?,
            "fen" => writeln!(
                out,
                "{}",
                generate_fen(self.session.board(), self.session.side_to_move())
            )?,
            "hint" => match self.session.hint() {
                Some(mv) => writeln!(out, "hint: {mv}")?,
                None => writeln!(out, "puzzle already solved")?,
            },
            "undo" => {
                if self.session.undo() {
                    self.selection = Selection::Idle;
                    writeln!(out, "{}", render_board(self.session.board()))?;
                } else {
                    writeln!(out, "nothing to undo")?;
                }
            }
            "reset" => {
                if let Err(e) = self.session.reset_puzzle() {
                    writeln!(out, "error: {e}")?;
                }
                self.show_puzzle(out)?;
            }
            "next" => {
                if self.session.next_puzzle() {
                    self.show_puzzle(out)?;
                } else {
                    writeln!(out, "no more puzzles")?;
                }
            }
            "prev" => {
                if self.session.previous_puzzle() {
                    self.show_puzzle(out)?;
                } else {
                    writeln!(out, "already at the first puzzle")?;
                }
            }
            "click" | "select" => match parts.next() {
                Some(square) => self.handle_click(square, out)?,
                None => writeln!(out, "usage: click <square>")?,
            },
            mv => match split_move(mv) {
                Some((from, to)) => {
                    self.selection = Selection::Idle;
                    let outcome = self.session.attempt_move(from, to);
                    self.report_outcome(&outcome, out)?;
                }
                None => writeln!(out, "unknown command '{mv}' ({HELP_TEXT})")?,
            },
        }

        Ok(false)
    }

    pub fn show_puzzle(&self, out: &mut impl Write) -> io::Result<()> {
        let puzzle = self.session.current_puzzle();
        writeln!(
            out,
            "puzzle {} ({}/{}): {}",
            puzzle.id,
            self.session.current_index() + 1,
            self.session.puzzle_count(),
            puzzle.description
        )?;
        writeln!(out, "{}", render_board(self.session.board()))?;
        writeln!(out, "{} to move", self.session.side_to_move())?;
        if self.session.config().show_hints {
            if let Some(mv) = self.session.hint() {
                writeln!(out, "hint: {mv}")?;
            }
        }
        Ok(())
    }

    fn handle_click(&mut self, square: &str, out: &mut impl Write) -> io::Result<()> {
        let selection = std::mem::take(&mut self.selection);
        let (next, outcome) = selection.click(&mut self.session, square);
        self.selection = next;

        match outcome {
            ClickOutcome::Ignored => writeln!(out, "nothing to select on {square}"),
            ClickOutcome::Selected(sq) => writeln!(out, "selected {sq}"),
            ClickOutcome::Deselected => writeln!(out, "selection cleared"),
            ClickOutcome::Moved(outcome) => self.report_outcome(&outcome, out),
        }
    }

    fn report_outcome(&self, outcome: &MoveOutcome, out: &mut impl Write) -> io::Result<()> {
        match outcome {
            MoveOutcome::Illegal => writeln!(out, "illegal move"),
            MoveOutcome::WrongMove { .. } => writeln!(out, "not the best move, try again"),
            MoveOutcome::AlreadySolved => writeln!(out, "puzzle already solved, type 'next'"),
            MoveOutcome::BrokenSolution { mv } => {
                writeln!(out, "puzzle solution is broken at {mv}")
            }
            MoveOutcome::Correct { reply } => {
                match reply {
                    Some(mv) => writeln!(out, "correct! opponent plays {mv}")?,
                    None => writeln!(out, "correct!")?,
                }
                writeln!(out, "{}", render_board(self.session.board()))?;
                writeln!(out, "{} to move", self.session.side_to_move())
            }
            MoveOutcome::Solved { reply } => {
                if let Some(mv) = reply {
                    writeln!(out, "opponent plays {mv}")?;
                }
                writeln!(out, "{}", render_board(self.session.board()))?;
                writeln!(out, "puzzle solved!")
            }
        }
    }
}
