//! Where the deck repository looks for the deck document.

use std::path::PathBuf;

/// Environment variable naming a deck file to try before the defaults.
pub const DECK_PATH_ENV: &str = "TAROT_DECK_PATH";

/// Ordered list of candidate deck locations. The first one that exists wins.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Candidate deck files, highest priority first.
    pub candidates: Vec<PathBuf>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            candidates: vec![
                PathBuf::from("web/tarot_deck.json"),
                PathBuf::from("tarot_deck.json"),
            ],
        }
    }
}

impl RepositoryConfig {
    /// Default candidates, preceded by `$TAROT_DECK_PATH` when it is set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var_os(DECK_PATH_ENV) {
            Some(path) if !path.is_empty() => config.with_priority(path),
            _ => config,
        }
    }

    /// Put a candidate ahead of all others.
    pub fn with_priority(mut self, path: impl Into<PathBuf>) -> Self {
        self.candidates.insert(0, path.into());
        self
    }

    /// Replace the candidate list.
    pub fn with_candidates(mut self, candidates: Vec<PathBuf>) -> Self {
        self.candidates = candidates;
        self
    }
}
