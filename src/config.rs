//! Trainer configuration.
//!
//! Defaults, then environment overrides (`PUZZLE_TRAINER_*`), then whatever
//! the binary's command line sets on top.

use std::env;
use std::path::PathBuf;

use crate::errors::Errors;

pub const ENV_PUZZLE_PATH: &str = "PUZZLE_TRAINER_PATH";
pub const ENV_AUTO_REPLY: &str = "PUZZLE_TRAINER_AUTO_REPLY";
pub const ENV_SEED: &str = "PUZZLE_TRAINER_SEED";
pub const ENV_HINTS: &str = "PUZZLE_TRAINER_HINTS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainerConfig {
    /// Puzzle list to load. `None` uses the default search paths.
    pub puzzle_path: Option<PathBuf>,
    /// Play the scripted opponent reply right after a correct move.
    pub auto_reply: bool,
    /// Shuffle the puzzle order with this seed.
    pub shuffle_seed: Option<u64>,
    pub show_hints: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            puzzle_path: None,
            auto_reply: true,
            shuffle_seed: None,
            show_hints: false,
        }
    }
}

impl TrainerConfig {
    pub fn from_env() -> Result<Self, Errors> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, starting from the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Errors>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_PUZZLE_PATH).filter(|p| !p.trim().is_empty()) {
            config.puzzle_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup(ENV_AUTO_REPLY) {
            config.auto_reply = parse_flag(ENV_AUTO_REPLY, &value)?;
        }
        if let Some(value) = lookup(ENV_SEED) {
            let seed = value.trim().parse::<u64>().map_err(|_| Errors::InvalidConfig {
                key: ENV_SEED.to_owned(),
                value: value.clone(),
            })?;
            config.shuffle_seed = Some(seed);
        }
        if let Some(value) = lookup(ENV_HINTS) {
            config.show_hints = parse_flag(ENV_HINTS, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, Errors> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Errors::InvalidConfig {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{TrainerConfig, ENV_AUTO_REPLY, ENV_HINTS, ENV_PUZZLE_PATH, ENV_SEED};
    use crate::errors::Errors;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = TrainerConfig::from_lookup(lookup(&[])).expect("defaults should load");
        assert_eq!(config, TrainerConfig::default());
        assert!(config.auto_reply);
    }

    #[test]
    fn environment_overrides_every_field() {
        let config = TrainerConfig::from_lookup(lookup(&[
            (ENV_PUZZLE_PATH, "data/mate_in_two.json"),
            (ENV_AUTO_REPLY, "off"),
            (ENV_SEED, "42"),
            (ENV_HINTS, "1"),
        ]))
        .expect("config should load");

        assert_eq!(config.puzzle_path, Some(PathBuf::from("data/mate_in_two.json")));
        assert!(!config.auto_reply);
        assert_eq!(config.shuffle_seed, Some(42));
        assert!(config.show_hints);
    }

    #[test]
    fn malformed_values_are_reported() {
        let err = TrainerConfig::from_lookup(lookup(&[(ENV_SEED, "forty-two")]))
            .expect_err("seed should fail");
        assert!(matches!(err, Errors::InvalidConfig { key, .. } if key == ENV_SEED));

        assert!(TrainerConfig::from_lookup(lookup(&[(ENV_AUTO_REPLY, "maybe")])).is_err());
    }
}
