//! Puzzle list loading.
//!
//! Lists are JSON: either a bare array of puzzles or an object with a
//! `puzzles` array. Loading validates every solution move string.

use std::fs;
use std::path::Path;

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::Errors;
use crate::puzzles::puzzle::Puzzle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleList {
    puzzles: Vec<Puzzle>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PuzzleFile {
    Bare(Vec<Puzzle>),
    Wrapped { puzzles: Vec<Puzzle> },
}

impl PuzzleList {
    /// Load `puzzles/puzzles.json` or `puzzles.json` when present, otherwise
    /// fall back to the embedded list.
    pub fn load_default() -> Self {
        let candidates = ["puzzles/puzzles.json", "puzzles.json", "data/puzzles.json"];

        for p in candidates {
            if Path::new(p).exists() {
                match Self::from_json_path(p) {
                    Ok(list) => return list,
                    Err(e) => warn!(path = p, error = %e, "skipping unreadable puzzle list"),
                }
            }
        }

        Self::embedded()
    }

    /// Built-in puzzles shipped with the crate.
    pub fn embedded() -> Self {
        Self::from_json_str(include_str!("data/default_puzzles.json")).unwrap_or_else(|e| {
            warn!(error = %e, "embedded puzzle list failed to load");
            Self {
                puzzles: Vec::new(),
            }
        })
    }

    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, Errors> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| Errors::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loading puzzle list");
        Self::from_json_str(&data)
    }

    pub fn from_json_str(json: &str) -> Result<Self, Errors> {
        let puzzles = match serde_json::from_str::<PuzzleFile>(json)? {
            PuzzleFile::Bare(puzzles) => puzzles,
            PuzzleFile::Wrapped { puzzles } => puzzles,
        };
        Self::from_puzzles(puzzles)
    }

    pub fn from_puzzles(puzzles: Vec<Puzzle>) -> Result<Self, Errors> {
        if puzzles.is_empty() {
            return Err(Errors::EmptyPuzzleList);
        }
        for puzzle in &puzzles {
            puzzle.validate()?;
        }
        Ok(Self { puzzles })
    }

    /// Same puzzles in a deterministic order derived from `seed`.
    #[must_use]
    pub fn shuffled(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.puzzles.shuffle(&mut rng);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.iter()
    }

    pub fn into_vec(self) -> Vec<Puzzle> {
        self.puzzles
    }
}
