use thiserror::Error;

/// Represents all error types surfaced by the trainer.
///
/// The move engine itself reports rejections through return values; these
/// are for the puzzle layer, strict helpers, configuration and I/O.
#[derive(Debug, Error)]
pub enum Errors {
    /// The provided algebraic notation is invalid or could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),
    /// A move string is not two concatenated algebraic squares.
    #[error("invalid move string: {0:?}")]
    InvalidMoveString(String),
    /// Attempted to move a piece that does not exist at the specified square.
    #[error("no piece on {0} to move")]
    TryingToMoveNonExistantPiece(String),
    /// A scripted solution move is not pseudo-legal in the position it is played from.
    #[error("puzzle {puzzle_id}: solution move {mv} is not playable for {side}")]
    InvalidSolutionMove {
        puzzle_id: String,
        mv: String,
        side: String,
    },
    /// A puzzle list contained no puzzles.
    #[error("puzzle list is empty")]
    EmptyPuzzleList,
    /// Requested puzzle index is outside the loaded list.
    #[error("puzzle index {index} out of range (0..{len})")]
    PuzzleIndexOutOfRange { index: usize, len: usize },
    /// The puzzle list could not be decoded.
    #[error("failed to parse puzzle list: {0}")]
    PuzzleListFormat(#[from] serde_json::Error),
    /// Reading a puzzle file failed.
    #[error("failed reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A configuration value could not be interpreted.
    #[error("invalid configuration value {key}={value:?}")]
    InvalidConfig { key: String, value: String },
}
