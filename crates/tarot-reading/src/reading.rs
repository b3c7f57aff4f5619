//! Reading types: orientation, spread positions, drawn cards.

use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use tarot_core::{Arcana, CardDefinition, CardRef, Suit};

/// Whether a drawn card is read upright or reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Read with the upright meaning.
    Upright,
    /// Read with the reversed meaning.
    Reversed,
}

impl Orientation {
    /// Flip a fair coin.
    pub fn flip<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::Reversed
        } else {
            Self::Upright
        }
    }

    /// Returns `true` for [`Orientation::Reversed`].
    pub fn is_reversed(self) -> bool {
        self == Self::Reversed
    }

    /// Human label, `"Upright"` or `"Reversed"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Upright => "Upright",
            Self::Reversed => "Reversed",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A position in the three-card spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// First card drawn.
    Past,
    /// Second card drawn.
    Present,
    /// Third card drawn.
    Future,
}

impl Position {
    /// Positions in draw order.
    pub const ALL: [Position; 3] = [Position::Past, Position::Present, Position::Future];

    /// Lower-case key, as used in the event payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Past => "past",
            Self::Present => "present",
            Self::Future => "future",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A card as it came out of the deck, with its orientation applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    /// The card definition.
    pub card: CardDefinition,
    /// Major or minor.
    pub arcana: Arcana,
    /// Suit, present iff minor.
    pub suit: Option<Suit>,
    /// How the card landed.
    pub orientation: Orientation,
    /// The upright or reversed text, whichever the orientation selects.
    pub meaning: String,
    /// The yes/no verdict, independent of orientation.
    pub yes_or_no: String,
}

impl DrawnCard {
    /// Resolve a card's meaning for the given orientation.
    pub fn new(card: CardRef<'_>, orientation: Orientation) -> Self {
        let description = &card.card.description;
        let meaning = match orientation {
            Orientation::Upright => description.upright.clone(),
            Orientation::Reversed => description.reversed.clone(),
        };
        Self {
            card: card.card.clone(),
            arcana: card.arcana,
            suit: card.suit,
            orientation,
            meaning,
            yes_or_no: description.yes_or_no.clone(),
        }
    }

    /// The card name.
    pub fn name(&self) -> &str {
        &self.card.name
    }
}

/// A past/present/future spread of three distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// The past card.
    pub past: DrawnCard,
    /// The present card.
    pub present: DrawnCard,
    /// The future card.
    pub future: DrawnCard,
}

impl Reading {
    /// The card at a position.
    pub fn card(&self, position: Position) -> &DrawnCard {
        match position {
            Position::Past => &self.past,
            Position::Present => &self.present,
            Position::Future => &self.future,
        }
    }

    /// Cards with their positions, in spread order.
    pub fn cards(&self) -> impl Iterator<Item = (Position, &DrawnCard)> {
        Position::ALL.into_iter().map(|p| (p, self.card(p)))
    }
}
