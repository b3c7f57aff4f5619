//! Three-card draws with OS-backed randomness.
//!
//! Selection is a partial Fisher–Yates shuffle over the flattened deck, so
//! every ordered triple of distinct cards is equally likely regardless of
//! deck order. Each card's orientation is an independent fair coin flip
//! from the same source.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng, TryRngCore};
use tarot_core::{CardRef, DeckDocument};
use tracing::debug;

use crate::error::{ReadingError, ReadingResult};
use crate::reading::{DrawnCard, Orientation, Reading};
use crate::repository::LoadedDeck;

/// Number of cards in a spread.
pub const SPREAD_SIZE: usize = 3;

/// The narrow capability the dialogue layer consumes.
pub trait TarotReader {
    /// Draw a fresh past/present/future reading.
    fn draw_reading(&self) -> ReadingResult<Reading>;

    /// The deck readings are drawn from.
    fn lookup_deck(&self) -> &DeckDocument;
}

/// Draws readings from a shared, read-only deck.
///
/// Holds no mutable state, so one engine can serve concurrent draws.
#[derive(Debug, Clone)]
pub struct ReadingEngine {
    deck: Arc<DeckDocument>,
}

impl ReadingEngine {
    /// Create an engine over a shared deck.
    pub fn new(deck: Arc<DeckDocument>) -> Self {
        Self { deck }
    }

    /// Create an engine over a loaded deck.
    pub fn from_loaded(loaded: &LoadedDeck) -> Self {
        Self::new(loaded.shared())
    }

    /// Number of cards a draw picks from.
    pub fn universe_size(&self) -> usize {
        self.deck.card_count()
    }

    /// Draw a reading using the operating system's random source.
    pub fn draw(&self) -> ReadingResult<Reading> {
        let mut rng = OsRng.unwrap_err();
        self.draw_with(&mut rng)
    }

    /// Draw a reading using the given cryptographically secure source.
    pub fn draw_with<R: Rng + CryptoRng + ?Sized>(&self, rng: &mut R) -> ReadingResult<Reading> {
        let mut universe: Vec<CardRef<'_>> = self.deck.cards().collect();
        if universe.len() < SPREAD_SIZE {
            return Err(ReadingError::InsufficientDeck {
                available: universe.len(),
                required: SPREAD_SIZE,
            });
        }

        let (picked, _) = universe.partial_shuffle(rng, SPREAD_SIZE);
        let past = DrawnCard::new(picked[0], Orientation::flip(rng));
        let present = DrawnCard::new(picked[1], Orientation::flip(rng));
        let future = DrawnCard::new(picked[2], Orientation::flip(rng));

        debug!(
            past = past.name(),
            present = present.name(),
            future = future.name(),
            "drew reading"
        );
        Ok(Reading {
            past,
            present,
            future,
        })
    }
}

impl TarotReader for ReadingEngine {
    fn draw_reading(&self) -> ReadingResult<Reading> {
        self.draw()
    }

    fn lookup_deck(&self) -> &DeckDocument {
        &self.deck
    }
}
