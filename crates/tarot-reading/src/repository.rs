//! Deck loading from a prioritized list of locations.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use strsim::jaro_winkler;
use tarot_core::{CardRef, DeckDocument};
use tracing::{debug, info, warn};

use crate::config::RepositoryConfig;
use crate::error::{DeckError, DeckResult};

/// Minimum similarity score for fuzzy card lookup (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Where a loaded deck came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// Loaded from this file.
    File(PathBuf),
    /// No candidate existed; the deck is empty.
    Empty,
}

/// A deck document loaded once and shared read-only.
#[derive(Debug, Clone)]
pub struct LoadedDeck {
    deck: Arc<DeckDocument>,
    source: DeckSource,
}

impl LoadedDeck {
    /// Wrap an in-memory deck.
    pub fn new(deck: DeckDocument, source: DeckSource) -> Self {
        Self {
            deck: Arc::new(deck),
            source,
        }
    }

    /// The deck document.
    pub fn deck(&self) -> &DeckDocument {
        &self.deck
    }

    /// A shared handle to the deck document.
    pub fn shared(&self) -> Arc<DeckDocument> {
        Arc::clone(&self.deck)
    }

    /// Where the deck came from.
    pub fn source(&self) -> &DeckSource {
        &self.source
    }

    /// Returns `true` if no deck file was found and the deck is empty.
    pub fn is_degraded(&self) -> bool {
        self.source == DeckSource::Empty
    }

    /// Every card, major first, then each suit in canonical order.
    pub fn universe(&self) -> Vec<CardRef<'_>> {
        self.deck.cards().collect()
    }

    /// Find a card by exact (case-insensitive) name, falling back to the
    /// closest fuzzy match.
    pub fn lookup(&self, name: &str) -> Option<CardRef<'_>> {
        if let Some(card) = self.deck.find(name) {
            return Some(card);
        }
        let input = name.to_lowercase();
        self.deck
            .cards()
            .map(|card| (jaro_winkler(&input, &card.card.name.to_lowercase()), card))
            .filter(|(score, _)| *score >= FUZZY_THRESHOLD)
            .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, card)| card)
    }

    /// Card names that start with, contain, or resemble `partial`, best first.
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<String> {
        let partial = partial.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .deck
            .cards()
            .filter_map(|card| {
                let name = card.card.name.as_str();
                let lower = name.to_lowercase();
                let score = if lower.starts_with(&partial) {
                    2.0
                } else if lower.contains(&partial) {
                    1.0
                } else {
                    jaro_winkler(&partial, &lower)
                };
                (score >= 0.6).then_some((score, name))
            })
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }
}

/// Loads the deck document from the first candidate path that exists.
#[derive(Debug, Clone)]
pub struct DeckRepository {
    candidates: Vec<PathBuf>,
}

impl DeckRepository {
    /// Create a repository over the configured candidates.
    pub fn new(config: RepositoryConfig) -> Self {
        Self {
            candidates: config.candidates,
        }
    }

    /// The candidate paths, highest priority first.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load the deck.
    ///
    /// If no candidate exists the result is an empty deck and a warning, not
    /// an error. A candidate that exists but cannot be read or parsed is an
    /// error.
    pub fn load(&self) -> DeckResult<LoadedDeck> {
        let Some(path) = self.candidates.iter().find(|p| p.is_file()) else {
            warn!(
                candidates = ?self.candidates,
                "no tarot deck file found, continuing with an empty deck"
            );
            return Ok(LoadedDeck::new(DeckDocument::empty(), DeckSource::Empty));
        };

        let deck = read_deck(path)?;
        info!(
            path = %path.display(),
            cards = deck.card_count(),
            major = deck.major().len(),
            "loaded tarot deck"
        );
        for (suit, count) in deck.suit_counts() {
            debug!(%suit, count, "suit loaded");
        }
        Ok(LoadedDeck::new(deck, DeckSource::File(path.clone())))
    }
}

impl Default for DeckRepository {
    fn default() -> Self {
        Self::new(RepositoryConfig::from_env())
    }
}

fn read_deck(path: &Path) -> DeckResult<DeckDocument> {
    let json = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    DeckDocument::from_json(&json).map_err(|source| DeckError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_core::{CardDefinition, CardDescription, DeckBuilder, Suit};
    use tempfile::TempDir;

    fn deck() -> DeckDocument {
        let mut b = DeckBuilder::new();
        for name in ["The Duck Debugger", "Merge Conflict", "Thread Deadlock"] {
            b.push_major(CardDefinition::new(name, CardDescription::default()))
                .unwrap();
        }
        b.push_minor(
            Suit::Docker,
            CardDefinition::new("Seven of Docker", CardDescription::default()),
        )
        .unwrap();
        b.build()
    }

    fn write_deck(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, deck().to_json().unwrap()).unwrap();
        path
    }

    #[test]
    fn first_existing_candidate_wins() {
        let tmp = TempDir::new().unwrap();
        let second = write_deck(&tmp, "second.json");
        let third = write_deck(&tmp, "third.json");
        let repo = DeckRepository::new(RepositoryConfig::default().with_candidates(vec![
            tmp.path().join("missing.json"),
            second.clone(),
            third,
        ]));

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.source(), &DeckSource::File(second));
        assert!(!loaded.is_degraded());
        assert_eq!(loaded.deck().card_count(), 4);
        assert_eq!(loaded.universe().len(), 4);
    }

    #[test]
    fn no_candidate_gives_empty_deck() {
        let tmp = TempDir::new().unwrap();
        let repo = DeckRepository::new(
            RepositoryConfig::default().with_candidates(vec![tmp.path().join("nope.json")]),
        );
        let loaded = repo.load().unwrap();
        assert!(loaded.is_degraded());
        assert!(loaded.deck().is_empty());
        assert!(loaded.deck().suit_counts().iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn corrupt_deck_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deck.json");
        std::fs::write(&path, "{ not json").unwrap();
        let repo =
            DeckRepository::new(RepositoryConfig::default().with_candidates(vec![path]));
        assert!(matches!(repo.load(), Err(DeckError::Parse { .. })));
    }

    #[test]
    fn lookup_exact_then_fuzzy() {
        let loaded = LoadedDeck::new(deck(), DeckSource::Empty);
        assert_eq!(
            loaded.lookup("merge conflict").unwrap().card.name,
            "Merge Conflict"
        );
        assert_eq!(
            loaded.lookup("The Duck Debuger").unwrap().card.name,
            "The Duck Debugger"
        );
        assert!(loaded.lookup("zzzz").is_none());
    }

    #[test]
    fn suggest_prefers_prefix_matches() {
        let loaded = LoadedDeck::new(deck(), DeckSource::Empty);
        let suggestions = loaded.suggest("the", 5);
        assert_eq!(suggestions[0], "The Duck Debugger");
        assert!(suggestions.contains(&"Thread Deadlock".to_string()));
        assert_eq!(loaded.suggest("the", 1).len(), 1);
    }
}
