//! Crate root module declarations for the chess puzzle trainer.
//!
//! Exposes the board model, the pseudo-legal move engine, notation helpers,
//! and the puzzle session layer so the binary, benches, and tests can import
//! stable module paths.

pub mod board_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod apply_move;
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod pseudo_legal;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod puzzles {
    pub mod puzzle;
    pub mod puzzle_list;
    pub mod puzzle_session;
    pub mod selection;
}

pub mod trainer {
    pub mod trainer_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_board;
}

pub mod config;
pub mod errors;
